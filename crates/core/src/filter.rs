//! Structural query filters.
//!
//! [`Where`] mirrors the JSON predicate shape list queries accept:
//!
//! ```json
//! { "tenant": { "equals": "acme" }, "and": [ { "status": { "equals": "published" } } ] }
//! ```
//!
//! Filters are only built here, never evaluated. The empty filter `{}`
//! matches every document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A constraint on a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConstraint {
    /// The field must equal this value.
    pub equals: Value,
}

/// A query filter.
///
/// Field constraints and nested `and` filters must all hold for a document to
/// match.
///
/// # Examples
///
/// ```
/// use multitenant_core::filter::Where;
/// use serde_json::json;
///
/// let filter = Where::equals("tenant", "acme");
/// assert_eq!(filter.to_json(), json!({ "tenant": { "equals": "acme" } }));
///
/// assert_eq!(Where::all().to_json(), json!({}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Where {
    /// Nested filters that must all match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub and: Vec<Where>,

    /// Per-field constraints, keyed by field name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldConstraint>,
}

impl Where {
    /// Returns the unconstrained filter.
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns a filter requiring `field` to equal `value`.
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(
            field.into(),
            FieldConstraint {
                equals: value.into(),
            },
        );
        Self {
            and: Vec::new(),
            fields,
        }
    }

    /// Returns `true` if this filter matches every document.
    pub fn is_unconstrained(&self) -> bool {
        self.fields.is_empty() && self.and.iter().all(Where::is_unconstrained)
    }

    /// Returns the constraint on `field`, if any.
    pub fn field(&self, field: &str) -> Option<&FieldConstraint> {
        self.fields.get(field)
    }

    /// Combines two filters so that both must match.
    ///
    /// An unconstrained side is dropped rather than nested.
    ///
    /// ```
    /// use multitenant_core::filter::Where;
    /// use serde_json::json;
    ///
    /// let base = Where::equals("status", "published");
    /// let scoped = base.clone().and(Where::equals("tenant", "acme"));
    /// assert_eq!(
    ///     scoped.to_json(),
    ///     json!({ "and": [
    ///         { "status": { "equals": "published" } },
    ///         { "tenant": { "equals": "acme" } }
    ///     ] })
    /// );
    ///
    /// assert_eq!(base.clone().and(Where::all()), base);
    /// ```
    pub fn and(self, other: Where) -> Where {
        match (self.is_unconstrained(), other.is_unconstrained()) {
            (true, _) => other,
            (_, true) => self,
            _ => Where {
                and: vec![self, other],
                fields: BTreeMap::new(),
            },
        }
    }

    /// Returns the filter as a JSON value.
    pub fn to_json(&self) -> Value {
        // A map of strings to plain JSON values cannot fail to serialize.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
