//! Axum extractors for tenant-scoped requests.
//!
//! - [`SelectedTenant`] - The tenant selected by the request
//! - [`SelectedTenantFilter`] - The list filter for the selected tenant

mod tenant;

pub use tenant::{SelectedTenant, SelectedTenantFilter};
