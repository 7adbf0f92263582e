//! Request header builders.

use http::{HeaderMap, HeaderValue, header::COOKIE};
use multitenant_core::TENANT_COOKIE_NAME;

/// Headers carrying the given raw `Cookie` line.
pub fn with_cookie_line(line: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(line).expect("Invalid cookie header"),
    );
    headers
}

/// Headers selecting `tenant` through the default tenant cookie.
pub fn with_selected_tenant(tenant: &str) -> HeaderMap {
    with_cookie_line(&format!("{}={}", TENANT_COOKIE_NAME, tenant))
}
