//! Query string serialization for list filters.
//!
//! Filter structs derive `Serialize`; [`serialize_to_query`] flattens them
//! into ordered `(key, value)` pairs:
//!
//! - `None`, `null` and blank strings are omitted
//! - strings are trimmed
//! - booleans and numbers use their string form
//! - arrays become repeated keys (`tags=a&tags=b`)
//! - nested objects are sent as JSON text

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::PayloadError;

/// Serializes a filter struct into query pairs.
///
/// # Errors
///
/// Returns [`PayloadError::Serialize`] if serde fails, or
/// [`PayloadError::NotAnObject`] if `params` is not a struct or map.
///
/// # Example
///
/// ```rust
/// use nepdora_api::rest::serialize_to_query;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Filters {
///     search: Option<String>,
///     page: Option<u32>,
///     tags: Vec<String>,
/// }
///
/// let query = serialize_to_query(&Filters {
///     search: Some("chair ".to_string()),
///     page: None,
///     tags: vec!["oak".to_string(), "pine".to_string()],
/// })
/// .unwrap();
///
/// assert_eq!(
///     query,
///     vec![
///         ("search".to_string(), "chair".to_string()),
///         ("tags".to_string(), "oak".to_string()),
///         ("tags".to_string(), "pine".to_string()),
///     ]
/// );
/// ```
pub fn serialize_to_query<T: Serialize + ?Sized>(
    params: &T,
) -> Result<Vec<(String, String)>, PayloadError> {
    let map = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        _ => return Err(PayloadError::NotAnObject),
    };

    let mut query = Vec::new();
    let mut sorted: Vec<(String, Value)> = map.into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    for (key, value) in sorted {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_to_string(&item) {
                        query.push((key.clone(), text));
                    }
                }
            }
            Value::Object(_) => query.push((key, value.to_string())),
            scalar => {
                if let Some(text) = scalar_to_string(&scalar) {
                    query.push((key, text));
                }
            }
        }
    }

    Ok(query)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(_) => Some(value.to_string()),
        Value::Null | Value::Array(_) => None,
    }
}

/// Sort direction for `ordering` and `sort_order` parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending (`field`).
    #[default]
    Asc,
    /// Descending (`-field`).
    Desc,
}

/// Builds an `ordering` value in the `-field` convention.
///
/// ```rust
/// use nepdora_api::rest::{ordering, SortOrder};
///
/// assert_eq!(ordering("created_at", SortOrder::Desc), "-created_at");
/// assert_eq!(ordering("name", SortOrder::Asc), "name");
/// ```
#[must_use]
pub fn ordering(field: &str, order: SortOrder) -> String {
    let field = field.trim().trim_start_matches('-');
    match order {
        SortOrder::Asc => field.to_string(),
        SortOrder::Desc => format!("-{field}"),
    }
}

/// Reads `page` and `page_size` back out of serialized query pairs.
pub(crate) fn page_hint(query: &[(String, String)]) -> (Option<u64>, Option<u64>) {
    let lookup = |name: &str| {
        query
            .iter()
            .find(|(k, _)| k == name)
            .and_then(|(_, v)| v.parse::<u64>().ok())
    };
    (lookup("page"), lookup("page_size"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Serialize, Default)]
    struct Filters {
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
        search: Option<String>,
        is_active: Option<bool>,
        status: Option<String>,
    }

    #[test]
    fn test_empty_filters_produce_no_pairs() {
        assert!(serialize_to_query(&Filters::default()).unwrap().is_empty());
    }

    #[test]
    fn test_blank_strings_are_omitted() {
        let filters = Filters {
            search: Some("   ".to_string()),
            status: Some(String::new()),
            ..Filters::default()
        };
        assert!(serialize_to_query(&filters).unwrap().is_empty());
    }

    #[test]
    fn test_scalars_are_stringified() {
        let filters = Filters {
            page: Some(2),
            is_active: Some(true),
            ..Filters::default()
        };
        let query = serialize_to_query(&filters).unwrap();
        assert_eq!(
            query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("is_active".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_flattened_map_and_nested_object() {
        let mut filters = HashMap::new();
        filters.insert("meta", json!({"a": 1}));
        filters.insert("status", json!("pending"));
        let query = serialize_to_query(&filters).unwrap();
        assert_eq!(query.len(), 2);
        assert!(query.contains(&("meta".to_string(), r#"{"a":1}"#.to_string())));
        assert!(query.contains(&("status".to_string(), "pending".to_string())));
    }

    #[test]
    fn test_unit_and_scalars_are_rejected_or_empty() {
        assert!(serialize_to_query(&()).unwrap().is_empty());
        assert!(matches!(
            serialize_to_query(&5),
            Err(PayloadError::NotAnObject)
        ));
    }

    #[test]
    fn test_ordering_strips_existing_prefix() {
        assert_eq!(ordering("-price", SortOrder::Desc), "-price");
        assert_eq!(ordering("-price", SortOrder::Asc), "price");
    }

    #[test]
    fn test_page_hint_reads_numeric_values() {
        let query = vec![
            ("page".to_string(), "3".to_string()),
            ("page_size".to_string(), "oops".to_string()),
        ];
        assert_eq!(page_hint(&query), (Some(3), None));
    }
}
