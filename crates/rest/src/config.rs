//! Tenant filter configuration.
//!
//! Supports programmatic configuration, command line arguments and
//! environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MT_TENANT_COOKIE` | payload-tenant | Cookie carrying the selected tenant |
//! | `MT_TENANT_FIELD` | tenant | Tenant reference field on scoped collections |
//! | `MT_TENANTS_COLLECTION` | tenants | Slug of the tenants collection |
//! | `MT_DEFAULT_ID_TYPE` | text | Identifier type for collections without a custom one |
//! | `MT_LOG_LEVEL` | info | Log level |
//!
//! # Example
//!
//! ```rust
//! use multitenant_rest::TenantFilterConfig;
//!
//! // Create from environment
//! let config = TenantFilterConfig::from_env();
//!
//! // Or create programmatically
//! let config = TenantFilterConfig {
//!     tenant_field: "organization".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;
use multitenant_core::{IdType, TENANT_COOKIE_NAME};

/// Configuration for tenant-scoped list filters.
#[derive(Debug, Clone, Parser)]
#[command(name = "multitenant")]
#[command(about = "Tenant-scoped list filter settings")]
pub struct TenantFilterConfig {
    /// Name of the cookie carrying the selected tenant.
    #[arg(long, env = "MT_TENANT_COOKIE", default_value = TENANT_COOKIE_NAME)]
    pub cookie_name: String,

    /// Name of the field referencing the tenant on scoped collections.
    #[arg(long, env = "MT_TENANT_FIELD", default_value = "tenant")]
    pub tenant_field: String,

    /// Slug of the tenants collection.
    #[arg(long, env = "MT_TENANTS_COLLECTION", default_value = "tenants")]
    pub tenants_collection: String,

    /// Identifier type for collections without a custom one (text, number).
    #[arg(long, env = "MT_DEFAULT_ID_TYPE", default_value = "text")]
    pub default_id_type: IdType,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "MT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for TenantFilterConfig {
    fn default() -> Self {
        Self {
            cookie_name: TENANT_COOKIE_NAME.to_string(),
            tenant_field: "tenant".to_string(),
            tenants_collection: "tenants".to_string(),
            default_id_type: IdType::Text,
            log_level: "info".to_string(),
        }
    }
}

impl TenantFilterConfig {
    /// Creates a configuration from environment variables, falling back to
    /// defaults when they cannot be parsed.
    pub fn from_env() -> Self {
        Self::try_parse_from(["multitenant"]).unwrap_or_default()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.cookie_name.is_empty() {
            errors.push("Tenant cookie name cannot be empty".to_string());
        } else if !is_cookie_token(&self.cookie_name) {
            errors.push(format!(
                "Tenant cookie name {:?} contains characters not allowed in a cookie name",
                self.cookie_name
            ));
        }

        if self.tenant_field.trim().is_empty() {
            errors.push("Tenant field name cannot be empty".to_string());
        }

        if self.tenants_collection.trim().is_empty() {
            errors.push("Tenants collection slug cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            log_level: "debug".to_string(),
            ..Default::default()
        }
    }
}

/// Returns `true` if `name` is a valid cookie name (an RFC 6265 token).
fn is_cookie_token(name: &str) -> bool {
    name.bytes().all(|b| {
        b.is_ascii_graphic()
            && !matches!(
                b,
                b'(' | b')'
                    | b'<'
                    | b'>'
                    | b'@'
                    | b','
                    | b';'
                    | b':'
                    | b'\\'
                    | b'"'
                    | b'/'
                    | b'['
                    | b']'
                    | b'?'
                    | b'='
                    | b'{'
                    | b'}'
            )
    })
}
