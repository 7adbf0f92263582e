//! Tenant selection extractors.
//!
//! Reads the selected tenant from the request cookie and exposes it, or the
//! list filter derived from it, to handlers.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use multitenant_core::{TenantSelection, Where};
use tracing::debug;

use crate::state::TenantFilterState;

/// Axum extractor for the tenant selected by the request.
///
/// # Example
///
/// ```rust,ignore
/// use multitenant_rest::extractors::SelectedTenant;
///
/// async fn handler(SelectedTenant(selection): SelectedTenant) {
///     if selection.is_all() {
///         println!("Viewing all tenants");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTenant(pub TenantSelection);

impl<S> FromRequestParts<S> for SelectedTenant
where
    TenantFilterState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = TenantFilterState::from_ref(state);
        Ok(SelectedTenant(state.selection(&parts.headers)))
    }
}

/// Axum extractor for the tenant-scoped list filter.
///
/// Uses the tenant field from [`TenantFilterConfig`](crate::TenantFilterConfig).
/// Handlers listing a collection with a different tenant field can call
/// [`TenantFilterState::resolve_for`] instead.
///
/// # Example
///
/// ```rust,ignore
/// use multitenant_rest::extractors::SelectedTenantFilter;
///
/// async fn list_posts(filter: SelectedTenantFilter) {
///     let query = filter.into_inner().and(base_filter());
///     // hand `query` to the data layer
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedTenantFilter {
    filter: Where,
}

impl SelectedTenantFilter {
    /// Creates an extractor value from a filter.
    pub fn new(filter: Where) -> Self {
        Self { filter }
    }

    /// Returns the filter.
    pub fn filter(&self) -> &Where {
        &self.filter
    }

    /// Returns `true` if the list is not restricted to a tenant.
    pub fn is_unconstrained(&self) -> bool {
        self.filter.is_unconstrained()
    }

    /// Consumes the extractor and returns the filter.
    pub fn into_inner(self) -> Where {
        self.filter
    }
}

impl<S> FromRequestParts<S> for SelectedTenantFilter
where
    TenantFilterState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = TenantFilterState::from_ref(state);
        let filter = state.resolve(&parts.headers);
        debug!(
            path = %parts.uri.path(),
            unconstrained = filter.is_unconstrained(),
            "Resolved tenant list filter"
        );
        Ok(SelectedTenantFilter::new(filter))
    }
}
