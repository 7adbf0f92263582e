//! # multitenant-rest - Tenant-scoped list filters for Axum
//!
//! This crate wires [`multitenant_core`] into Axum applications. Handlers
//! that list tenant-scoped collections take a [`SelectedTenantFilter`] and
//! pass its [`Where`](multitenant_core::Where) on to the data layer.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axum::{Json, Router, routing::get};
//! use multitenant_core::{CollectionConfig, IdType};
//! use multitenant_rest::{
//!     SelectedTenantFilter, TenantFilterConfig, TenantFilterState, init_logging,
//! };
//!
//! async fn list_posts(filter: SelectedTenantFilter) -> Json<serde_json::Value> {
//!     Json(filter.filter().to_json())
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = TenantFilterConfig::from_env();
//!     init_logging(&config.log_level);
//!
//!     let state = TenantFilterState::new(
//!         config,
//!         [CollectionConfig::new("tenants").with_custom_id_type(IdType::Number)],
//!     )?;
//!
//!     let app = Router::new().route("/posts", get(list_posts)).with_state(state);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Request Cookie
//!
//! The selected tenant is read from the `payload-tenant` cookie (configurable
//! through `MT_TENANT_COOKIE`). The value `_ALL`, an empty value, or a missing
//! cookie select all tenants and produce the empty filter.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration from arguments and environment
//! - [`state`] - Shared resolver state
//! - [`extractors`] - Axum extractors for the selection and the filter
//! - [`error`] - Setup errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod state;

pub use config::TenantFilterConfig;
pub use error::{SetupError, SetupResult};
pub use extractors::{SelectedTenant, SelectedTenantFilter};
pub use state::{CookieTenantFilterResolver, TenantFilterState};

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "multitenant_rest={},multitenant_core={}",
            level, level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
