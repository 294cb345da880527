//! Services offered by the site owner, addressed by slug.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::FileAttachment;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// A service listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    /// Backend id.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// Service title.
    pub title: String,

    /// URL slug.
    pub slug: String,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail_image: Option<String>,

    /// Alt text for the thumbnail.
    #[serde(default)]
    pub thumbnail_image_alt_description: Option<String>,

    /// SEO title.
    #[serde(default)]
    pub meta_title: Option<String>,

    /// SEO description.
    #[serde(default)]
    pub meta_description: Option<String>,

    /// Whether the record is publicly visible.
    #[serde(default)]
    pub is_published: bool,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Service {
    type Id = String;
    type ListParams = ServiceListParams;
    type CreateInput = ServiceInput;
    type UpdateInput = ServiceInput;

    const NAME: &'static str = "Service";
    const ID_KEY: &'static str = "slug";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "service"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["slug"],
            "service/{slug}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "service"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["slug"],
            "service/{slug}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["slug"],
            "service/{slug}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.slug.clone())
    }
}

/// Filters for listing services.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServiceListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Sort expression, e.g. `-created_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

/// Service fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ServiceInput {
    /// Service title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Alt text for the thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_alt_description: Option<String>,

    /// SEO title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    /// SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Whether the record is publicly visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,

    /// Thumbnail, sent as a file part.
    #[serde(skip)]
    pub thumbnail_image: Option<FileAttachment>,
}

impl ResourcePayload for ServiceInput {
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        self.thumbnail_image
            .iter()
            .map(|f| ("thumbnail_image", f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{encode_payload, get_path};

    #[test]
    fn test_update_by_slug_is_patch() {
        let path = get_path(Service::PATHS, ResourceOperation::Update, &["slug"]).unwrap();
        assert_eq!(path.http_method, HttpMethod::Patch);
        assert_eq!(path.template, "service/{slug}");
    }

    #[test]
    fn test_thumbnail_makes_multipart() {
        let input = ServiceInput {
            title: Some("SEO audit".to_string()),
            is_published: Some(false),
            thumbnail_image: Some(FileAttachment::new("seo.png", vec![7])),
            ..Default::default()
        };
        let body = encode_payload(&input).unwrap();
        let form = body.as_form().unwrap();
        assert_eq!(form.text_values("is_published"), vec!["false"]);
        assert_eq!(form.file_part("thumbnail_image").unwrap().file_name(), "seo.png");
    }
}
