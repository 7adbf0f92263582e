//! # multitenant-core - Tenant-scoped list filters
//!
//! This crate builds the query filters that restrict list views of
//! tenant-scoped collections to the tenant a user has selected.
//!
//! ## Overview
//!
//! An admin user picks a tenant in the tenant selector. The choice travels
//! with every request in a cookie (`payload-tenant` by default). When a
//! tenant-scoped collection is listed, the selected tenant becomes an
//! equality filter on the collection's tenant field:
//!
//! ```json
//! { "tenant": { "equals": 42 } }
//! ```
//!
//! Selecting "all tenants" (the `_ALL` cookie value, or no cookie) produces the
//! empty filter `{}` instead.
//!
//! The identifier type of the tenants collection decides how the cookie is
//! read: `42` is the number `42` for a number-keyed tenants collection and the
//! string `"42"` otherwise.
//!
//! ## Architecture
//!
//! - [`tenant`] - Tenant identifiers, selections and the selection cookie
//! - [`collection`] - Collection definitions and identifier-type lookup
//! - [`filter`] - The [`Where`] filter structure
//! - [`resolver`] - [`TenantFilterResolver`], which ties the pieces together
//! - [`error`] - Errors raised by the collaborators
//!
//! ## Quick Start
//!
//! ```
//! use http::{HeaderMap, HeaderValue, header::COOKIE};
//! use multitenant_core::{
//!     CollectionConfig, CollectionRegistry, CookieTenantSelection, IdType, TenantFilterResolver,
//! };
//! use serde_json::json;
//!
//! let mut registry = CollectionRegistry::new(IdType::Text);
//! registry.register(CollectionConfig::new("tenants")).unwrap();
//!
//! let resolver = TenantFilterResolver::new(registry, CookieTenantSelection::default());
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(COOKIE, HeaderValue::from_static("payload-tenant=acme"));
//! assert_eq!(
//!     resolver.resolve(&headers, "tenant", "tenants").to_json(),
//!     json!({ "tenant": { "equals": "acme" } })
//! );
//!
//! headers.insert(COOKIE, HeaderValue::from_static("payload-tenant=_ALL"));
//! assert_eq!(resolver.resolve(&headers, "tenant", "tenants").to_json(), json!({}));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod collection;
pub mod error;
pub mod filter;
pub mod resolver;
pub mod tenant;

pub use collection::{
    AccessRule, CollectionAccess, CollectionConfig, CollectionIdTypeLookup, CollectionRegistry,
    FieldConfig, FieldKind,
};
pub use error::{CollectionError, SelectionError};
pub use filter::{FieldConstraint, Where};
pub use resolver::{TenantFilterResolver, filter_documents_by_selected_tenant};
pub use tenant::{
    CookieTenantSelection, IdType, SELECT_ALL, TENANT_COOKIE_NAME, TenantIdValue,
    TenantSelection, TenantSelectionSource,
};
