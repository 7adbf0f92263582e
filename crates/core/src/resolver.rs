//! Tenant-scoped list filters.
//!
//! Provides the [`TenantFilterResolver`], which turns the tenant a request has
//! selected into a [`Where`] filter for a tenant-scoped collection.
//!
//! # Resolution
//!
//! 1. Look up the identifier type of the tenants collection.
//! 2. Read the selection from the request, coerced to that type.
//! 3. "All tenants" yields the unconstrained filter; a specific tenant
//!    yields `{ <tenant field>: { equals: <id> } }`.
//!
//! The resolver does not check that the selected tenant exists or that the
//! caller may see it.

use http::HeaderMap;
use tracing::debug;

use crate::collection::CollectionIdTypeLookup;
use crate::filter::Where;
use crate::tenant::{TenantSelection, TenantSelectionSource};

/// Builds tenant-scoped list filters from request headers.
///
/// # Example
///
/// ```
/// use http::{HeaderMap, HeaderValue, header::COOKIE};
/// use multitenant_core::collection::{CollectionConfig, CollectionRegistry};
/// use multitenant_core::resolver::TenantFilterResolver;
/// use multitenant_core::tenant::{CookieTenantSelection, IdType};
/// use serde_json::json;
///
/// let mut registry = CollectionRegistry::new(IdType::Text);
/// registry
///     .register(CollectionConfig::new("tenants").with_custom_id_type(IdType::Number))
///     .unwrap();
/// let resolver = TenantFilterResolver::new(registry, CookieTenantSelection::default());
///
/// let mut headers = HeaderMap::new();
/// headers.insert(COOKIE, HeaderValue::from_static("payload-tenant=42"));
///
/// let filter = resolver.resolve(&headers, "tenant", "tenants");
/// assert_eq!(filter.to_json(), json!({ "tenant": { "equals": 42 } }));
/// ```
#[derive(Debug, Clone)]
pub struct TenantFilterResolver<L, S> {
    lookup: L,
    source: S,
}

impl<L, S> TenantFilterResolver<L, S>
where
    L: CollectionIdTypeLookup,
    S: TenantSelectionSource,
{
    /// Creates a resolver from an identifier-type lookup and a selection source.
    pub fn new(lookup: L, source: S) -> Self {
        Self { lookup, source }
    }

    /// Returns the identifier-type lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Returns the selection source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the tenant selection carried by `headers`.
    pub fn selection(&self, headers: &HeaderMap, tenants_collection: &str) -> TenantSelection {
        let id_type = self.lookup.id_type(tenants_collection);
        self.source.selection(headers, id_type)
    }

    /// Resolves the list filter for documents referencing the selected tenant
    /// through `tenant_field`.
    pub fn resolve(
        &self,
        headers: &HeaderMap,
        tenant_field: &str,
        tenants_collection: &str,
    ) -> Where {
        filter_documents_by_selected_tenant(
            headers,
            &self.lookup,
            &self.source,
            tenant_field,
            tenants_collection,
        )
    }

    /// Resolves the tenant filter and combines it with a collection's base
    /// list filter.
    pub fn resolve_with_base(
        &self,
        headers: &HeaderMap,
        base: Option<Where>,
        tenant_field: &str,
        tenants_collection: &str,
    ) -> Where {
        let scoped = self.resolve(headers, tenant_field, tenants_collection);
        match base {
            Some(base) => base.and(scoped),
            None => scoped,
        }
    }
}

/// Builds the list filter for the tenant selected in `headers`.
///
/// Free-function form of [`TenantFilterResolver::resolve`] for callers that
/// hold the collaborators separately.
pub fn filter_documents_by_selected_tenant<L, S>(
    headers: &HeaderMap,
    lookup: &L,
    source: &S,
    tenant_field: &str,
    tenants_collection: &str,
) -> Where
where
    L: CollectionIdTypeLookup + ?Sized,
    S: TenantSelectionSource + ?Sized,
{
    let id_type = lookup.id_type(tenants_collection);

    match source.selection(headers, id_type) {
        TenantSelection::AllTenants => {
            debug!(tenant_field, "All tenants selected, list is unfiltered");
            Where::all()
        }
        TenantSelection::Specific(id) => {
            debug!(tenant_field, tenant = %id, %id_type, "Scoping list to selected tenant");
            Where::equals(tenant_field, id)
        }
    }
}
