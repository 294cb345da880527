//! Product categories, addressed by slug.
//!
//! Categories may carry an image. An input with an image is sent as
//! multipart form data; one without is sent as JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::clients::FileAttachment;
//! use nepdora_api::rest::RestResource;
//! use nepdora_api::rest::resources::{Category, CategoryInput, CategoryListParams, CategorySort};
//! use nepdora_api::rest::SortOrder;
//!
//! let newest = Category::all(&client, Some(CategoryListParams {
//!     sort: Some(CategorySort::new("created_at", SortOrder::Desc)),
//!     ..Default::default()
//! })).await?;
//!
//! let created = Category::create(&client, &CategoryInput {
//!     name: "Chairs".to_string(),
//!     image: Some(FileAttachment::new("chairs.jpg", bytes)),
//!     ..Default::default()
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::FileAttachment;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource, SortOrder};
use crate::HttpMethod;

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Backend id.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// Category name.
    pub name: String,

    /// URL identifier, assigned by the backend from the name.
    pub slug: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Category {
    type Id = String;
    type ListParams = CategoryListParams;
    type CreateInput = CategoryInput;
    type UpdateInput = CategoryUpdate;

    const NAME: &'static str = "Category";
    const ID_KEY: &'static str = "slug";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "category"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["slug"],
            "category/{slug}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "category"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["slug"],
            "category/{slug}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["slug"],
            "category/{slug}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.slug.clone())
    }
}

/// A `sort_by` / `sort_order` pair. `sort_order` is only sent with a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySort {
    /// Field to sort by.
    pub sort_by: String,
    /// Sort direction.
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl CategorySort {
    #[must_use]
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            sort_by: field.into(),
            sort_order: order,
        }
    }
}

/// Filters for listing categories.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoryListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Sort field and direction.
    #[serde(flatten)]
    pub sort: Option<CategorySort>,
}

/// A new category.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CategoryInput {
    /// Category name.
    pub name: String,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category image, sent as a file part.
    #[serde(skip)]
    pub image: Option<FileAttachment>,
}

impl ResourcePayload for CategoryInput {
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        self.image.iter().map(|f| ("image", f)).collect()
    }
}

/// A partial category update.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    /// Category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A replacement image.
    #[serde(skip)]
    pub image: Option<FileAttachment>,
}

impl ResourcePayload for CategoryUpdate {
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        self.image.iter().map(|f| ("image", f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthPolicy;
    use crate::rest::{build_path, encode_payload, get_path, path_ids, serialize_to_query};

    #[test]
    fn test_sort_order_only_sent_with_sort_by() {
        let plain = CategoryListParams {
            search: Some("sofa".to_string()),
            ..Default::default()
        };
        let query = serialize_to_query(&plain).unwrap();
        assert_eq!(query, vec![("search".to_string(), "sofa".to_string())]);

        let sorted = CategoryListParams {
            sort: Some(CategorySort::new("name", SortOrder::Desc)),
            ..Default::default()
        };
        let query = serialize_to_query(&sorted).unwrap();
        assert_eq!(
            query,
            vec![
                ("sort_by".to_string(), "name".to_string()),
                ("sort_order".to_string(), "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_slug_paths() {
        assert_eq!(Category::ID_KEY, "slug");
        assert_eq!(Category::AUTH, AuthPolicy::Admin);
        let path = get_path(Category::PATHS, ResourceOperation::Find, &["slug"]).unwrap();
        let url = build_path(path.template, &path_ids(&[("slug", "living room")]));
        assert_eq!(url, "category/living%20room");
    }

    #[test]
    fn test_image_switches_to_multipart() {
        let mut input = CategoryInput {
            name: "Chairs".to_string(),
            description: Some("Seating".to_string()),
            image: None,
        };
        assert!(encode_payload(&input).unwrap().as_json().is_some());

        input.image = Some(FileAttachment::new("c.png", vec![1]));
        let body = encode_payload(&input).unwrap();
        let form = body.as_form().unwrap();
        assert_eq!(form.text_values("name"), vec!["Chairs"]);
        assert_eq!(form.text_values("description"), vec!["Seating"]);
        assert!(form.file_part("image").is_some());
    }

    #[test]
    fn test_category_deserialization() {
        let category: Category = serde_json::from_str(
            r#"{"id": 2, "name": "Chairs", "slug": "chairs", "description": null, "image": null}"#,
        )
        .unwrap();
        assert_eq!(category.get_id().as_deref(), Some("chairs"));
        assert!(category.image.is_none());
    }
}
