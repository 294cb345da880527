//! Customer testimonials.
//!
//! Create and update are multipart when a photo is attached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::FileAttachment;
use crate::rest::resources::BasicListParams;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// A testimonial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    /// Backend id.
    pub id: u64,

    /// Author name.
    pub name: String,

    /// Job title of the author.
    #[serde(default)]
    pub designation: Option<String>,

    /// The testimonial text.
    pub comment: String,

    /// Photo URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for Testimonial {
    type Id = u64;
    type ListParams = BasicListParams;
    type CreateInput = TestimonialInput;
    type UpdateInput = TestimonialInput;

    const NAME: &'static str = "Testimonial";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "testimonial"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "testimonial/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "testimonial"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "testimonial/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "testimonial/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// Testimonial fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct TestimonialInput {
    /// Author name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Job title of the author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,

    /// The testimonial text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Author photo, sent as a file part.
    #[serde(skip)]
    pub image: Option<FileAttachment>,
}

impl ResourcePayload for TestimonialInput {
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        self.image.iter().map(|f| ("image", f)).collect()
    }
}

/// Listing filters, reusing the shared set.
pub type TestimonialListParams = BasicListParams;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_deserialization() {
        let testimonial: Testimonial = serde_json::from_str(
            r#"{"id": 3, "name": "Anil", "designation": "CEO", "comment": "Great work", "image": null}"#,
        )
        .unwrap();
        assert_eq!(testimonial.get_id(), Some(3));
        assert!(testimonial.image.is_none());
    }

    #[test]
    fn test_input_without_image_is_json() {
        let input = TestimonialInput {
            comment: Some("Fast delivery".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"comment":"Fast delivery"}"#
        );
        assert!(input.attachments().is_empty());
    }
}
