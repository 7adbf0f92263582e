//! Error types for setting up tenant filtering.
//!
//! Resolving a filter for a request never fails; these errors only surface
//! while building [`TenantFilterState`](crate::TenantFilterState).

use multitenant_core::CollectionError;
use thiserror::Error;

/// Errors raised while building the tenant filter state.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The configuration failed validation.
    #[error("invalid tenant filter configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    /// A collection could not be registered.
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Result type for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;
