//! Collection definitions and identifier-type lookup.
//!
//! Collections are declared as static configuration. The only thing the
//! tenant filters need from them is how their primary key is typed, which
//! [`CollectionIdTypeLookup`] exposes.
//!
//! # Examples
//!
//! ```
//! use multitenant_core::collection::{
//!     CollectionConfig, CollectionIdTypeLookup, CollectionRegistry, FieldConfig,
//! };
//! use multitenant_core::tenant::IdType;
//!
//! let mut registry = CollectionRegistry::new(IdType::Text);
//! registry
//!     .register(CollectionConfig::new("tenants").with_custom_id_type(IdType::Number))
//!     .unwrap();
//! registry
//!     .register(CollectionConfig::new("posts").with_field(FieldConfig::text("title")))
//!     .unwrap();
//!
//! assert_eq!(registry.id_type("tenants"), IdType::Number);
//! assert_eq!(registry.id_type("posts"), IdType::Text);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CollectionError;
use crate::tenant::IdType;

/// Looks up how a collection's primary key is typed.
pub trait CollectionIdTypeLookup: Send + Sync {
    /// Returns the identifier type of the collection with the given slug.
    fn id_type(&self, collection: &str) -> IdType;
}

/// The kind of value a field stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain text.
    Text,
    /// A number.
    Number,
    /// A reference to a document in another collection.
    Relationship,
}

/// A single field on a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Field name.
    pub name: String,
    /// Stored value kind.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Whether the field stores one value per locale.
    #[serde(default)]
    pub localized: bool,
    /// Whether a value must be present.
    #[serde(default)]
    pub required: bool,
    /// Target collection slug for relationship fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_to: Option<String>,
}

impl FieldConfig {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            localized: false,
            required: false,
            relation_to: None,
        }
    }

    /// Creates a text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Creates a number field.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// Creates a relationship field pointing at `relation_to`.
    pub fn relationship(name: impl Into<String>, relation_to: impl Into<String>) -> Self {
        Self {
            relation_to: Some(relation_to.into()),
            ..Self::new(name, FieldKind::Relationship)
        }
    }

    /// Marks the field as localized.
    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Who may perform an operation on a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRule {
    /// Anyone, including anonymous requests.
    Public,
    /// Any authenticated user.
    #[default]
    Authenticated,
    /// Nobody.
    Denied,
}

/// Declared access rules for a collection's operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionAccess {
    /// Listing and reading documents.
    #[serde(default)]
    pub read: AccessRule,
    /// Creating documents.
    #[serde(default)]
    pub create: AccessRule,
    /// Updating documents.
    #[serde(default)]
    pub update: AccessRule,
    /// Deleting documents.
    #[serde(default)]
    pub delete: AccessRule,
}

/// Static definition of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    /// Unique collection slug.
    pub slug: String,
    /// Primary key type, when it differs from the registry default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id_type: Option<IdType>,
    /// Field used as the document title in admin listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_as_title: Option<String>,
    /// Declared access rules.
    #[serde(default)]
    pub access: CollectionAccess,
    /// Fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl CollectionConfig {
    /// Creates an empty collection definition.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            custom_id_type: None,
            use_as_title: None,
            access: CollectionAccess::default(),
            fields: Vec::new(),
        }
    }

    /// Sets a custom identifier type.
    pub fn with_custom_id_type(mut self, id_type: IdType) -> Self {
        self.custom_id_type = Some(id_type);
        self
    }

    /// Sets the title field.
    pub fn with_title(mut self, field: impl Into<String>) -> Self {
        self.use_as_title = Some(field.into());
        self
    }

    /// Sets the access rules.
    pub fn with_access(mut self, access: CollectionAccess) -> Self {
        self.access = access;
        self
    }

    /// Appends a field.
    pub fn with_field(mut self, field: FieldConfig) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field with the given name.
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// The set of collections known to the application.
///
/// Collections without a custom identifier type, and slugs that are not
/// registered at all, use the registry's default identifier type.
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    default_id_type: IdType,
    collections: HashMap<String, CollectionConfig>,
}

impl CollectionRegistry {
    /// Creates an empty registry with the given default identifier type.
    pub fn new(default_id_type: IdType) -> Self {
        Self {
            default_id_type,
            collections: HashMap::new(),
        }
    }

    /// Registers a collection. Slugs must be unique.
    pub fn register(&mut self, config: CollectionConfig) -> Result<(), CollectionError> {
        if self.collections.contains_key(&config.slug) {
            return Err(CollectionError::DuplicateCollection { slug: config.slug });
        }
        self.collections.insert(config.slug.clone(), config);
        Ok(())
    }

    /// Returns the collection registered under `slug`.
    pub fn get(&self, slug: &str) -> Option<&CollectionConfig> {
        self.collections.get(slug)
    }

    /// Returns the default identifier type.
    pub fn default_id_type(&self) -> IdType {
        self.default_id_type
    }

    /// Returns the number of registered collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns `true` if no collections are registered.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Returns the identifier type of a registered collection.
    ///
    /// Unlike [`CollectionIdTypeLookup::id_type`], an unknown slug is an error.
    pub fn try_id_type(&self, slug: &str) -> Result<IdType, CollectionError> {
        self.get(slug)
            .map(|c| c.custom_id_type.unwrap_or(self.default_id_type))
            .ok_or_else(|| CollectionError::UnknownCollection {
                slug: slug.to_string(),
            })
    }
}

impl CollectionIdTypeLookup for CollectionRegistry {
    fn id_type(&self, collection: &str) -> IdType {
        self.try_id_type(collection).unwrap_or(self.default_id_type)
    }
}
