//! User-defined collections and their rows.
//!
//! A [`Collection`] is a schema created in the site builder; its rows are
//! [`CollectionData`], nested under `collections/{collection}/data/`.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::rest::{path_ids, RestResource};
//! use nepdora_api::rest::resources::{CollectionData, CollectionDataFilters};
//!
//! let rows = CollectionData::list(&client, "newsletter", CollectionDataFilters::default()
//!     .filter("email", "ram@example.com")).await?;
//!
//! let row = CollectionData::find_in(&client, path_ids(&[("collection", "newsletter")]), 7).await?;
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::AuthPolicy;
use crate::clients::RestClient;
use crate::rest::{
    path_ids, Page, ResourceError, ResourceOperation, ResourcePath, ResourcePayload, RestResource,
};
use crate::HttpMethod;

/// A collection definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Backend id.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// Collection name.
    pub name: String,

    /// URL slug.
    pub slug: String,

    /// Field definitions, as stored by the builder.
    #[serde(default)]
    pub fields: Vec<Value>,

    /// Field template for new entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fields: Option<Value>,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Collection {
    type Id = String;
    type ListParams = ();
    type CreateInput = CollectionInput;
    type UpdateInput = CollectionInput;

    const NAME: &'static str = "Collection";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;
    const ID_KEY: &'static str = "slug";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "collections"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["slug"],
            "collections/{slug}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "collections"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["slug"],
            "collections/{slug}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["slug"],
            "collections/{slug}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.slug.clone())
    }
}

/// Collection create or update fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CollectionInput {
    /// Collection name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Field definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Value>>,
}

impl ResourcePayload for CollectionInput {}

/// One row of a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionData {
    /// Backend id.
    pub id: u64,

    /// Slug of the owning collection, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Value>,

    /// Entry values keyed by field name.
    #[serde(default)]
    pub data: Map<String, Value>,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for CollectionData {
    type Id = u64;
    type ListParams = CollectionDataFilters;
    type CreateInput = CollectionDataInput;
    type UpdateInput = CollectionDataInput;

    const NAME: &'static str = "Collection data";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[
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
            HttpMethod::Post,
            ResourceOperation::Create,
            &["collection"],
            "collections/{collection}/data",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["collection", "id"],
            "collections/{collection}/data/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["collection", "id"],
            "collections/{collection}/data/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

impl CollectionData {
    /// Lists the rows of `collection`.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error.
    pub async fn list(
        client: &RestClient,
        collection: &str,
        filters: CollectionDataFilters,
    ) -> Result<Page<Self>, ResourceError> {
        Self::all_in(client, path_ids(&[("collection", collection)]), Some(filters)).await
    }

    /// Adds a row to `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the row is rejected.
    pub async fn insert(
        client: &RestClient,
        collection: &str,
        data: Map<String, Value>,
    ) -> Result<Self, ResourceError> {
        Self::create_in(
            client,
            path_ids(&[("collection", collection)]),
            &CollectionDataInput { data },
        )
        .await
    }
}

/// Row fields. Sent as `{"data": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CollectionDataInput {
    /// Entry values keyed by field name.
    pub data: Map<String, Value>,
}

impl ResourcePayload for CollectionDataInput {}

/// Row filters. Any field of the collection can be filtered on.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionDataFilters {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Exact-match filters on entry fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl CollectionDataFilters {
    /// Adds a field filter.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}
