//! Tenant identifiers and request-level tenant selection.
//!
//! # Core Types
//!
//! - [`IdType`] - Whether a collection's primary key is text or a number
//! - [`TenantIdValue`] - A tenant id carrying its identifier type
//! - [`TenantSelection`] - Either all tenants or one specific tenant
//! - [`TenantSelectionSource`] - Where a request's selection comes from
//!
//! # Selection Cookie
//!
//! [`CookieTenantSelection`] reads the selection from the `payload-tenant`
//! cookie by default. The reserved value [`SELECT_ALL`] and a missing cookie
//! both mean "all tenants".
//!
//! ```
//! use http::{HeaderMap, HeaderValue, header::COOKIE};
//! use multitenant_core::tenant::{
//!     CookieTenantSelection, IdType, TenantIdValue, TenantSelection, TenantSelectionSource,
//! };
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(COOKIE, HeaderValue::from_static("payload-tenant=42"));
//!
//! let source = CookieTenantSelection::default();
//! assert_eq!(
//!     source.selection(&headers, IdType::Number),
//!     TenantSelection::Specific(TenantIdValue::Number(42))
//! );
//! ```

mod id;
mod selection;

pub use id::{IdType, TenantIdValue};
pub use selection::{
    CookieTenantSelection, SELECT_ALL, TENANT_COOKIE_NAME, TenantSelection,
    TenantSelectionSource, read_cookie,
};
