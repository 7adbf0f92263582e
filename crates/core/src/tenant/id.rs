//! Tenant identifier values and identifier types.
//!
//! A tenant is referenced by the primary key of a document in the tenants
//! collection. Depending on how that collection is configured the key is
//! either text or a number, so the identifier carries its type with it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CollectionError, SelectionError};

/// How a collection's primary key is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// String identifiers (document ids, slugs, UUIDs).
    #[default]
    Text,
    /// Integer identifiers (serial primary keys).
    Number,
}

impl IdType {
    /// Returns the canonical lowercase name of this identifier type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Text => "text",
            IdType::Number => "number",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" => Ok(IdType::Text),
            "number" | "numeric" => Ok(IdType::Number),
            _ => Err(CollectionError::UnknownIdType {
                name: s.to_string(),
            }),
        }
    }
}

/// A typed tenant identifier.
///
/// Serializes as a bare JSON string or JSON number so that filters built from
/// it compare against the stored key with the right type.
///
/// # Examples
///
/// ```
/// use multitenant_core::tenant::{IdType, TenantIdValue};
///
/// let text = TenantIdValue::parse("42", IdType::Text).unwrap();
/// assert_eq!(serde_json::to_string(&text).unwrap(), "\"42\"");
///
/// let number = TenantIdValue::parse("42", IdType::Number).unwrap();
/// assert_eq!(serde_json::to_string(&number).unwrap(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TenantIdValue {
    /// A text identifier.
    Text(String),
    /// A numeric identifier.
    Number(i64),
}

impl TenantIdValue {
    /// Parses a raw identifier according to the given identifier type.
    ///
    /// The raw representation is never used to guess the type: `"42"` is text
    /// when `id_type` is [`IdType::Text`], and `"abc"` is rejected when
    /// `id_type` is [`IdType::Number`].
    pub fn parse(raw: &str, id_type: IdType) -> Result<Self, SelectionError> {
        match id_type {
            IdType::Text => Ok(TenantIdValue::Text(raw.to_string())),
            IdType::Number => raw.trim().parse::<i64>().map(TenantIdValue::Number).map_err(
                |_| SelectionError::InvalidIdentifier {
                    value: raw.to_string(),
                    id_type,
                },
            ),
        }
    }

    /// Returns the identifier type of this value.
    pub fn id_type(&self) -> IdType {
        match self {
            TenantIdValue::Text(_) => IdType::Text,
            TenantIdValue::Number(_) => IdType::Number,
        }
    }

    /// Returns the value as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        self.clone().into()
    }
}

impl fmt::Display for TenantIdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenantIdValue::Text(s) => f.write_str(s),
            TenantIdValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for TenantIdValue {
    fn from(s: &str) -> Self {
        TenantIdValue::Text(s.to_string())
    }
}

impl From<String> for TenantIdValue {
    fn from(s: String) -> Self {
        TenantIdValue::Text(s)
    }
}

impl From<i64> for TenantIdValue {
    fn from(n: i64) -> Self {
        TenantIdValue::Number(n)
    }
}

impl From<TenantIdValue> for serde_json::Value {
    fn from(id: TenantIdValue) -> Self {
        match id {
            TenantIdValue::Text(s) => serde_json::Value::String(s),
            TenantIdValue::Number(n) => serde_json::Value::from(n),
        }
    }
}
