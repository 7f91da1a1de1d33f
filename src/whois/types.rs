//! WHOIS data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single WHOIS field value, serialized as a plain JSON string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WhoisValue {
    /// Scalar value (timestamps are stored here as RFC 3339 text)
    Text(String),
    /// Repeated value such as name servers or status codes
    List(Vec<String>),
}

impl WhoisValue {
    /// Builds a list value, dropping blank entries.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WhoisValue::List(
            items
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.trim().is_empty())
                .collect(),
        )
    }

    /// The scalar, or the first list entry.
    pub fn first(&self) -> Option<&str> {
        match self {
            WhoisValue::Text(s) => Some(s.as_str()),
            WhoisValue::List(items) => items.first().map(String::as_str),
        }
    }

    /// True for an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            WhoisValue::Text(s) => s.is_empty(),
            WhoisValue::List(items) => items.is_empty(),
        }
    }

    /// Adds another occurrence of the same field, turning a scalar into a list.
    /// Exact repeats are ignored.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            WhoisValue::Text(existing) => {
                if *existing != value {
                    *self = WhoisValue::List(vec![std::mem::take(existing), value]);
                }
            }
            WhoisValue::List(items) => {
                if !items.contains(&value) {
                    items.push(value);
                }
            }
        }
    }
}

impl From<&str> for WhoisValue {
    fn from(s: &str) -> Self {
        WhoisValue::Text(s.to_string())
    }
}

impl From<String> for WhoisValue {
    fn from(s: String) -> Self {
        WhoisValue::Text(s)
    }
}

/// WHOIS lookup result: field name to value, no fixed schema.
pub type WhoisRecord = BTreeMap<String, WhoisValue>;
