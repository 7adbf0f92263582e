//! Shared state for tenant filtering.
//!
//! Holds the configured resolver and configuration. Handlers reach it
//! through the extractors in [`crate::extractors`], which require the
//! router state to provide a [`TenantFilterState`] via [`axum::extract::FromRef`].

use std::sync::Arc;

use http::HeaderMap;
use multitenant_core::{
    CollectionConfig, CollectionRegistry, CookieTenantSelection, TenantFilterResolver,
    TenantSelection, Where,
};
use tracing::info;

use crate::config::TenantFilterConfig;
use crate::error::{SetupError, SetupResult};

/// The resolver type used by the REST layer.
pub type CookieTenantFilterResolver =
    TenantFilterResolver<CollectionRegistry, CookieTenantSelection>;

/// Shared tenant filter state.
///
/// # Example
///
/// ```rust
/// use multitenant_core::{CollectionConfig, IdType};
/// use multitenant_rest::{TenantFilterConfig, TenantFilterState};
///
/// let state = TenantFilterState::new(
///     TenantFilterConfig::default(),
///     [CollectionConfig::new("tenants").with_custom_id_type(IdType::Number)],
/// )
/// .unwrap();
/// assert_eq!(state.config().tenant_field, "tenant");
/// ```
#[derive(Debug, Clone)]
pub struct TenantFilterState {
    resolver: Arc<CookieTenantFilterResolver>,
    config: Arc<TenantFilterConfig>,
}

impl TenantFilterState {
    /// Creates the state from a configuration and the application's collections.
    pub fn new(
        config: TenantFilterConfig,
        collections: impl IntoIterator<Item = CollectionConfig>,
    ) -> SetupResult<Self> {
        config.validate().map_err(SetupError::InvalidConfig)?;

        let mut registry = CollectionRegistry::new(config.default_id_type);
        for collection in collections {
            registry.register(collection)?;
        }

        info!(
            cookie = %config.cookie_name,
            tenant_field = %config.tenant_field,
            tenants_collection = %config.tenants_collection,
            collections = registry.len(),
            "Tenant filtering configured"
        );

        let source = CookieTenantSelection::new(config.cookie_name.clone());
        Ok(Self {
            resolver: Arc::new(TenantFilterResolver::new(registry, source)),
            config: Arc::new(config),
        })
    }

    /// Returns the resolver.
    pub fn resolver(&self) -> &CookieTenantFilterResolver {
        &self.resolver
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TenantFilterConfig {
        &self.config
    }

    /// Returns the tenant selection carried by `headers`.
    pub fn selection(&self, headers: &HeaderMap) -> TenantSelection {
        self.resolver.selection(headers, &self.config.tenants_collection)
    }

    /// Resolves the list filter using the configured tenant field.
    pub fn resolve(&self, headers: &HeaderMap) -> Where {
        self.resolve_for(headers, &self.config.tenant_field)
    }

    /// Resolves the list filter for a collection whose tenant reference lives
    /// in `tenant_field`.
    pub fn resolve_for(&self, headers: &HeaderMap, tenant_field: &str) -> Where {
        self.resolver.resolve(headers, tenant_field, &self.config.tenants_collection)
    }
}
