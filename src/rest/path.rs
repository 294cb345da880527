//! Path building infrastructure for REST resources.
//!
//! Resources may be reachable through more than one path. Collection data
//! items, for example, are only addressable through their parent:
//! - `collections/{collection}/data/` (list)
//! - `collections/{collection}/data/{id}` (detail)
//!
//! The path resolution system selects the most specific path whose ids are
//! all available. Templates omit the `api/` prefix and the trailing slash;
//! [`RestClient`](crate::clients::RestClient) adds both.
//!
//! # Example
//!
//! ```rust
//! use nepdora_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use nepdora_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["collection", "id"],
//!         "collections/{collection}/data/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["collection", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("collection", "booking".to_string());
//! ids.insert("id", "12".to_string());
//! assert_eq!(build_path(path.template, &ids), "collections/booking/data/12");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by id or slug (GET /resources/{id}/).
    Find,
    /// List resources (GET /resources/).
    All,
    /// Create a new resource (POST /resources/).
    Create,
    /// Partially update a resource (PATCH /resources/{id}/).
    Update,
    /// Replace a resource in full (PUT /resources/{id}/).
    Replace,
    /// Delete a resource (DELETE /resources/{id}/).
    Delete,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
            Self::Replace => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Replace => "replace",
            Self::Delete => "delete",
        }
    }

    /// Returns the verb used in fallback error messages ("fetch", "create", ...).
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Find | Self::All => "fetch",
            Self::Create => "create",
            Self::Update | Self::Replace => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for id interpolation:
/// - `category/{slug}` - Single id
/// - `collections/{collection}/data/{id}` - Parent and child ids
///
/// # Example
///
/// ```rust
/// use nepdora_api::rest::{ResourcePath, ResourceOperation};
/// use nepdora_api::HttpMethod;
///
/// const CATEGORY_FIND: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Find,
///     &["slug"],
///     "category/{slug}",
/// );
/// assert_eq!(CATEGORY_FIND.id_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required id parameters in order (e.g., `["collection", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required ids for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required ids are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Paths are filtered by operation and by id availability, then the one
/// with the most required ids wins.
///
/// # Example
///
/// ```rust
/// use nepdora_api::rest::{ResourcePath, ResourceOperation, get_path};
/// use nepdora_api::HttpMethod;
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "logistics/list"),
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "logistics/{id}"),
/// ];
///
/// let path = get_path(PATHS, ResourceOperation::All, &[]);
/// assert_eq!(path.unwrap().template, "logistics/list");
///
/// assert!(get_path(PATHS, ResourceOperation::Find, &[]).is_none());
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating ids.
///
/// Values are percent-encoded so slugs with spaces or slashes stay inside
/// their segment.
///
/// # Example
///
/// ```rust
/// use nepdora_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("slug", "garden chairs");
///
/// assert_eq!(build_path("category/{slug}", &ids), "category/garden%20chairs");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();
    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA_PATHS: &[ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["collection"],
            "collections/{collection}/data",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["collection", "id"],
            "collections/{collection}/data/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["collection", "id"],
            "collections/{collection}/data/{id}",
        ),
    ];

    #[test]
    fn test_default_http_methods() {
        assert_eq!(ResourceOperation::Find.default_http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::All.default_http_method(), HttpMethod::Get);
        assert_eq!(ResourceOperation::Create.default_http_method(), HttpMethod::Post);
        assert_eq!(ResourceOperation::Update.default_http_method(), HttpMethod::Patch);
        assert_eq!(ResourceOperation::Replace.default_http_method(), HttpMethod::Put);
        assert_eq!(ResourceOperation::Delete.default_http_method(), HttpMethod::Delete);
    }

    #[test]
    fn test_operation_names_and_verbs() {
        assert_eq!(ResourceOperation::Replace.as_str(), "replace");
        assert_eq!(ResourceOperation::All.verb(), "fetch");
        assert_eq!(ResourceOperation::Replace.verb(), "update");
    }

    #[test]
    fn test_get_path_requires_parent_id() {
        assert!(get_path(DATA_PATHS, ResourceOperation::All, &[]).is_none());
        let path = get_path(DATA_PATHS, ResourceOperation::All, &["collection"]).unwrap();
        assert_eq!(path.template, "collections/{collection}/data");
    }

    #[test]
    fn test_get_path_prefers_most_specific() {
        const PATHS: &[ResourcePath] = &[
            ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "data/{id}"),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["collection", "id"],
                "collections/{collection}/data/{id}",
            ),
        ];
        let path = get_path(PATHS, ResourceOperation::Find, &["collection", "id"]).unwrap();
        assert_eq!(path.id_count(), 2);

        let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(path.template, "data/{id}");
    }

    #[test]
    fn test_get_path_returns_none_for_missing_operation() {
        assert!(get_path(DATA_PATHS, ResourceOperation::Delete, &["collection", "id"]).is_none());
    }

    #[test]
    fn test_build_path_interpolates_all_ids() {
        let mut ids = HashMap::new();
        ids.insert("collection", "booking".to_string());
        ids.insert("id", "42".to_string());
        assert_eq!(
            build_path("collections/{collection}/data/{id}", &ids),
            "collections/booking/data/42"
        );
    }

    #[test]
    fn test_build_path_encodes_reserved_characters() {
        let mut ids = HashMap::new();
        ids.insert("slug", "a/b?c");
        assert_eq!(build_path("service/{slug}", &ids), "service/a%2Fb%3Fc");
    }

    #[test]
    fn test_build_path_accepts_numeric_values() {
        let mut ids = HashMap::new();
        ids.insert("id", 7_u64);
        assert_eq!(build_path("faq/{id}", &ids), "faq/7");
    }
}
