//! Collection definitions used across tests.

use multitenant_core::{
    AccessRule, CollectionAccess, CollectionConfig, CollectionRegistry, FieldConfig, IdType,
};

pub const CATEGORIES_SLUG: &str = "categories";
pub const TENANTS_SLUG: &str = "tenants";

/// A localized categories collection that anyone may read and create.
pub fn categories_collection() -> CollectionConfig {
    CollectionConfig::new(CATEGORIES_SLUG)
        .with_access(CollectionAccess {
            read: AccessRule::Public,
            create: AccessRule::Public,
            ..Default::default()
        })
        .with_title("name")
        .with_field(FieldConfig::text("name").localized())
        .with_field(FieldConfig::text("slug").localized().required())
        .with_field(FieldConfig::relationship("tenant", TENANTS_SLUG))
}

/// A tenants collection keyed by the given identifier type.
pub fn tenants_collection(id_type: IdType) -> CollectionConfig {
    CollectionConfig::new(TENANTS_SLUG)
        .with_custom_id_type(id_type)
        .with_title("name")
        .with_field(FieldConfig::text("name").required())
}

/// A registry holding the tenants and categories collections.
pub fn registry(tenants_id_type: IdType) -> CollectionRegistry {
    let mut registry = CollectionRegistry::new(IdType::Text);
    registry
        .register(tenants_collection(tenants_id_type))
        .expect("Failed to register tenants");
    registry
        .register(categories_collection())
        .expect("Failed to register categories");
    registry
}
