//! Error types for tenant selection and collection lookups.
//!
//! The filter resolver itself never fails. These errors belong to its
//! collaborators: parsing the selection cookie and looking up collection
//! identifier types.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::tenant::IdType;

/// Errors raised while turning a raw cookie value into a [`TenantSelection`].
///
/// [`TenantSelection`]: crate::tenant::TenantSelection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The value does not fit the identifier type of the tenants collection.
    #[error("tenant selection {value:?} is not a valid {id_type} identifier")]
    InvalidIdentifier { value: String, id_type: IdType },
}

/// Errors raised by the collection registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// No collection is registered under the given slug.
    #[error("unknown collection: {slug}")]
    UnknownCollection { slug: String },

    /// A collection with the same slug is already registered.
    #[error("collection already registered: {slug}")]
    DuplicateCollection { slug: String },

    /// An identifier type name could not be parsed.
    #[error("unknown identifier type: {name} (expected \"text\" or \"number\")")]
    UnknownIdType { name: String },
}
