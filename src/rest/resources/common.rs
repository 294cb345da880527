//! Types shared by several resources.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The `page` / `page_size` / `search` filter set most list endpoints accept.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BasicListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Free-text search. Trimmed before sending; blank values are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl BasicListParams {
    /// Filters for a single page.
    #[must_use]
    pub const fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            search: None,
        }
    }

    /// Filters for a search term.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }
}

/// Accepts an id sent either as a JSON string or as a number.
///
/// Integration configs use string ids in URLs while the backend serializes
/// them as numbers.
pub(crate) fn flexible_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
