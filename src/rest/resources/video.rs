//! Embedded videos. Public endpoints; edits replace the record (PUT).

use serde::{Deserialize, Serialize};

use crate::auth::AuthPolicy;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// A video embedded on the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Backend id.
    pub id: u64,

    /// Video title.
    #[serde(default)]
    pub title: Option<String>,

    /// Video URL.
    pub video_url: String,

    /// Source platform ("youtube", "tiktok", ...).
    #[serde(default)]
    pub platform: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl RestResource for Video {
    type Id = u64;
    type ListParams = ();
    type CreateInput = VideoInput;
    type UpdateInput = VideoInput;

    const NAME: &'static str = "Video";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "videos"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "videos"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Replace, &["id"], "videos/{id}"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "videos/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// A complete video record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VideoInput {
    /// Video title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Video URL.
    pub video_url: String,

    /// Hosting platform, e.g. `youtube`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ResourcePayload for VideoInput {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_video_replace_only() {
        let replace = get_path(Video::PATHS, ResourceOperation::Replace, &["id"]).unwrap();
        assert_eq!(replace.http_method, HttpMethod::Put);
        assert!(get_path(Video::PATHS, ResourceOperation::Update, &["id"]).is_none());
        assert_eq!(Video::AUTH, AuthPolicy::Anonymous);
    }
}
