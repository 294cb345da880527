//! Portfolio projects, with their tags and categories.
//!
//! Projects are addressed by slug. A project input carrying a thumbnail is
//! sent as multipart form data with one `tags` part per tag id.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::rest::{ordering, RestResource, SortOrder};
//! use nepdora_api::rest::resources::{Portfolio, PortfolioListParams, PortfolioTag};
//!
//! let tagged = Portfolio::all(&client, Some(PortfolioListParams {
//!     tags: vec!["react".to_string(), "rust".to_string()],
//!     ordering: Some(ordering("created_at", SortOrder::Desc)),
//!     ..Default::default()
//! })).await?;
//!
//! let tags = PortfolioTag::all(&client, None).await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::FileAttachment;
use crate::rest::{
    FieldEncoding, ResourceOperation, ResourcePath, ResourcePayload, RestResource,
};
use crate::HttpMethod;

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    /// Backend id.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// Project title.
    pub title: String,

    /// URL slug.
    pub slug: String,

    /// Body content (HTML).
    #[serde(default)]
    pub content: Option<String>,

    /// Short summary.
    #[serde(default)]
    pub excerpt: Option<String>,

    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail_image: Option<String>,

    /// Alt text for the thumbnail.
    #[serde(default)]
    pub thumbnail_image_alt_description: Option<String>,

    /// The category, by id or expanded.
    #[serde(default)]
    pub category: Option<Value>,

    /// Tags, by id or expanded.
    #[serde(default)]
    pub tags: Vec<Value>,

    /// Link to the live project.
    #[serde(default)]
    pub project_url: Option<String>,

    /// Source repository URL.
    #[serde(default)]
    pub github_url: Option<String>,

    /// Client the project was built for.
    #[serde(default)]
    pub client_name: Option<String>,

    /// Date the project was finished.
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,

    /// Whether the record is publicly visible.
    #[serde(default)]
    pub is_published: bool,

    /// SEO title.
    #[serde(default)]
    pub meta_title: Option<String>,

    /// SEO description.
    #[serde(default)]
    pub meta_description: Option<String>,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Portfolio {
    type Id = String;
    type ListParams = PortfolioListParams;
    type CreateInput = PortfolioInput;
    type UpdateInput = PortfolioInput;

    const NAME: &'static str = "Portfolio";
    const ID_KEY: &'static str = "slug";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "portfolio"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["slug"],
            "portfolio/{slug}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "portfolio"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["slug"],
            "portfolio/{slug}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["slug"],
            "portfolio/{slug}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.slug.clone())
    }
}

/// Filters for listing projects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PortfolioListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Sort field, `-field` for descending. See [`crate::rest::ordering`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,

    /// Category slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Tag slugs, sent as repeated `tags` parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Project fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PortfolioInput {
    /// Project title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Body content (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Alt text for the thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_alt_description: Option<String>,

    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,

    /// Tag ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,

    /// Link to the live project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,

    /// Source repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    /// Client the project was built for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Date the project was finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,

    /// Whether the record is publicly visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    /// SEO title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    /// SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Thumbnail, sent as a file part.
    #[serde(skip)]
    pub thumbnail_image: Option<FileAttachment>,
}

impl ResourcePayload for PortfolioInput {
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        self.thumbnail_image
            .iter()
            .map(|f| ("thumbnail_image", f))
            .collect()
    }

    fn field_rules(&self) -> &'static [(&'static str, FieldEncoding)] {
        &[("tags", FieldEncoding::RepeatedKey)]
    }
}

/// A portfolio tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioTag {
    /// Backend id.
    pub id: u64,
    /// Tag name.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
}

/// A new tag or category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NameInput {
    /// The name to create.
    pub name: String,
}

impl NameInput {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ResourcePayload for NameInput {}

impl RestResource for PortfolioTag {
    type Id = u64;
    type ListParams = ();
    type CreateInput = NameInput;
    type UpdateInput = NameInput;

    const NAME: &'static str = "Portfolio tag";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "portfolio-tags"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "portfolio-tags"),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// A portfolio category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioCategory {
    /// Backend id.
    pub id: u64,
    /// Category name.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
}

impl RestResource for PortfolioCategory {
    type Id = u64;
    type ListParams = ();
    type CreateInput = NameInput;
    type UpdateInput = NameInput;

    const NAME: &'static str = "Portfolio category";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "portfolio/category",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "portfolio/category",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{encode_payload, get_path, ordering, serialize_to_query, SortOrder};

    #[test]
    fn test_tags_are_repeated_query_keys() {
        let params = PortfolioListParams {
            tags: vec!["react".to_string(), "rust".to_string()],
            ordering: Some(ordering("created_at", SortOrder::Desc)),
            ..Default::default()
        };
        let query = serialize_to_query(&params).unwrap();
        assert_eq!(
            query,
            vec![
                ("ordering".to_string(), "-created_at".to_string()),
                ("tags".to_string(), "react".to_string()),
                ("tags".to_string(), "rust".to_string()),
            ]
        );
    }

    #[test]
    fn test_multipart_input_repeats_tags() {
        let input = PortfolioInput {
            title: Some("Shop redesign".to_string()),
            tags: Some(vec![3, 7]),
            is_published: Some(true),
            thumbnail_image: Some(FileAttachment::new("t.webp", vec![0; 4])),
            ..Default::default()
        };
        let body = encode_payload(&input).unwrap();
        let form = body.as_form().unwrap();
        assert_eq!(form.text_values("tags"), vec!["3", "7"]);
        assert_eq!(form.text_values("is_published"), vec!["true"]);
        assert_eq!(form.file_part("thumbnail_image").unwrap().len(), 4);
        assert!(form.text_values("content").is_empty());
    }

    #[test]
    fn test_tag_and_category_paths() {
        let tags = get_path(PortfolioTag::PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(tags.template, "portfolio-tags");
        let categories = get_path(PortfolioCategory::PATHS, ResourceOperation::All, &[]).unwrap();
        assert_eq!(categories.template, "portfolio/category");
    }

    #[test]
    fn test_portfolio_deserialization() {
        let portfolio: Portfolio = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Shop redesign",
                "slug": "shop-redesign",
                "category": {"id": 2, "name": "Web"},
                "tags": [{"id": 3, "name": "react"}],
                "completion_date": "2024-11-30",
                "is_published": true
            }"#,
        )
        .unwrap();
        assert_eq!(portfolio.get_id().as_deref(), Some("shop-redesign"));
        assert_eq!(portfolio.tags.len(), 1);
        assert_eq!(portfolio.completion_date, NaiveDate::from_ymd_opt(2024, 11, 30));
    }
}
