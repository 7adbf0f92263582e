//! Common test utilities for tenant filter HTTP tests.
//!
//! Builds a small Axum app whose handlers echo the filter they were given,
//! so tests can assert on the exact JSON a data layer would receive.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use axum_test::TestServer;
use multitenant_core::{CollectionConfig, FieldConfig, IdType, TenantSelection, Where};
use multitenant_rest::{
    SelectedTenant, SelectedTenantFilter, TenantFilterConfig, TenantFilterState,
};

/// Lists posts, scoped through the configured tenant field.
async fn list_posts(filter: SelectedTenantFilter) -> Json<Where> {
    Json(filter.into_inner())
}

/// Returns the raw selection.
async fn selection(SelectedTenant(selection): SelectedTenant) -> Json<TenantSelection> {
    Json(selection)
}

/// Lists published categories, scoped through their `site` field.
async fn list_categories(
    State(state): State<TenantFilterState>,
    headers: HeaderMap,
) -> Json<Where> {
    let base = Where::equals("_status", "published");
    Json(state.resolver().resolve_with_base(
        &headers,
        Some(base),
        "site",
        &state.config().tenants_collection,
    ))
}

/// Collections registered with every test server.
fn collections(config: &TenantFilterConfig, tenants_id_type: IdType) -> Vec<CollectionConfig> {
    vec![
        CollectionConfig::new(config.tenants_collection.clone())
            .with_custom_id_type(tenants_id_type)
            .with_field(FieldConfig::text("name").required()),
        CollectionConfig::new("posts").with_field(FieldConfig::relationship(
            config.tenant_field.clone(),
            config.tenants_collection.clone(),
        )),
        CollectionConfig::new("categories")
            .with_title("name")
            .with_field(FieldConfig::text("name").localized())
            .with_field(FieldConfig::text("slug").localized().required())
            .with_field(FieldConfig::relationship(
                "site",
                config.tenants_collection.clone(),
            )),
    ]
}

/// Creates a test server with the given configuration and tenants id type.
pub fn create_test_server(config: TenantFilterConfig, tenants_id_type: IdType) -> TestServer {
    let collections = collections(&config, tenants_id_type);
    let state =
        TenantFilterState::new(config, collections).expect("Failed to create tenant filter state");

    let app = Router::new()
        .route("/posts", get(list_posts))
        .route("/selection", get(selection))
        .route("/categories", get(list_categories))
        .with_state(state);

    TestServer::new(app).expect("Failed to create test server")
}
