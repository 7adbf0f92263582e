//! The tenant a request has selected for viewing.
//!
//! Admin users switch tenants with a selector that stores the chosen tenant
//! in a cookie. List views then read that cookie back on every request.

use http::HeaderMap;
use http::header::COOKIE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SelectionError;

use super::id::{IdType, TenantIdValue};

/// Raw cookie value meaning "do not restrict by tenant".
pub const SELECT_ALL: &str = "_ALL";

/// Default name of the cookie carrying the selected tenant.
pub const TENANT_COOKIE_NAME: &str = "payload-tenant";

/// Which tenant's documents a request wants to see.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum TenantSelection {
    /// No tenant restriction.
    AllTenants,
    /// Restrict to a single tenant.
    Specific(TenantIdValue),
}

impl TenantSelection {
    /// Parses a raw selection value.
    ///
    /// Empty values and [`SELECT_ALL`] map to [`TenantSelection::AllTenants`];
    /// anything else is coerced according to `id_type`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multitenant_core::tenant::{IdType, TenantIdValue, TenantSelection};
    ///
    /// assert_eq!(
    ///     TenantSelection::parse("_ALL", IdType::Number).unwrap(),
    ///     TenantSelection::AllTenants
    /// );
    /// assert_eq!(
    ///     TenantSelection::parse("42", IdType::Number).unwrap(),
    ///     TenantSelection::Specific(TenantIdValue::Number(42))
    /// );
    /// ```
    pub fn parse(raw: &str, id_type: IdType) -> Result<Self, SelectionError> {
        let raw = raw.trim();
        if raw.is_empty() || raw == SELECT_ALL {
            return Ok(TenantSelection::AllTenants);
        }
        TenantIdValue::parse(raw, id_type).map(TenantSelection::Specific)
    }

    /// Returns `true` if no tenant restriction applies.
    pub fn is_all(&self) -> bool {
        matches!(self, TenantSelection::AllTenants)
    }

    /// Returns the selected tenant id, if a specific tenant is selected.
    pub fn tenant_id(&self) -> Option<&TenantIdValue> {
        match self {
            TenantSelection::AllTenants => None,
            TenantSelection::Specific(id) => Some(id),
        }
    }
}

/// Supplies the tenant selection for a request.
pub trait TenantSelectionSource: Send + Sync {
    /// Returns the selection carried by `headers`, coerced to `id_type`.
    ///
    /// Implementations never fail: a missing or unusable value yields
    /// [`TenantSelection::AllTenants`].
    fn selection(&self, headers: &HeaderMap, id_type: IdType) -> TenantSelection;
}

/// Reads the tenant selection from a request cookie.
#[derive(Debug, Clone)]
pub struct CookieTenantSelection {
    cookie_name: String,
}

impl CookieTenantSelection {
    /// Creates a source reading the given cookie.
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    /// Returns the name of the cookie this source reads.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

impl Default for CookieTenantSelection {
    fn default() -> Self {
        Self::new(TENANT_COOKIE_NAME)
    }
}

impl TenantSelectionSource for CookieTenantSelection {
    fn selection(&self, headers: &HeaderMap, id_type: IdType) -> TenantSelection {
        let Some(raw) = read_cookie(headers, &self.cookie_name) else {
            debug!(cookie = %self.cookie_name, "No tenant cookie, selecting all tenants");
            return TenantSelection::AllTenants;
        };

        match TenantSelection::parse(raw, id_type) {
            Ok(selection) => selection,
            Err(e) => {
                warn!(cookie = %self.cookie_name, error = %e, "Ignoring malformed tenant cookie");
                TenantSelection::AllTenants
            }
        }
    }
}

/// Returns the value of the named cookie from the request's `Cookie` headers.
///
/// All `Cookie` header lines are searched; the first matching pair wins.
/// Surrounding double quotes on the value are removed.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|line| line.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value)
        })
}
