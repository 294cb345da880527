//! Team members. Public endpoints; edits replace the record (PUT).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthPolicy;
use crate::clients::FileAttachment;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// A member of the site owner's team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    /// Backend id.
    pub id: u64,

    /// Member name.
    pub name: String,

    /// Job title.
    #[serde(default)]
    pub role: Option<String>,

    /// Short biography.
    #[serde(default)]
    pub about: Option<String>,

    /// Photo URL.
    #[serde(default)]
    pub photo: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Facebook profile URL.
    #[serde(default)]
    pub facebook: Option<String>,

    /// Instagram profile URL.
    #[serde(default)]
    pub instagram: Option<String>,

    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,

    /// Display position, ascending.
    #[serde(default)]
    pub order: Option<i64>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for TeamMember {
    type Id = u64;
    type ListParams = ();
    type CreateInput = TeamMemberInput;
    type UpdateInput = TeamMemberInput;

    const NAME: &'static str = "Team member";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "team-member"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "team-member"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Replace,
            &["id"],
            "team-member/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "team-member/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// A complete team member record.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct TeamMemberInput {
    /// Member name.
    pub name: String,

    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Short biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Facebook profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    /// Instagram profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    /// LinkedIn profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    /// Display position, ascending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Photo, sent as a file part.
    #[serde(skip)]
    pub photo: Option<FileAttachment>,
}

impl ResourcePayload for TeamMemberInput {
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        self.photo.iter().map(|f| ("photo", f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{encode_payload, get_path};

    #[test]
    fn test_team_member_paths() {
        assert!(get_path(TeamMember::PATHS, ResourceOperation::Replace, &["id"]).is_some());
        assert!(get_path(TeamMember::PATHS, ResourceOperation::Update, &["id"]).is_none());
    }

    #[test]
    fn test_order_is_stringified_in_form() {
        let input = TeamMemberInput {
            name: "Sita".to_string(),
            order: Some(2),
            photo: Some(FileAttachment::new("sita.jpg", vec![1])),
            ..Default::default()
        };
        let body = encode_payload(&input).unwrap();
        let form = body.as_form().unwrap();
        assert_eq!(form.text_values("order"), vec!["2"]);
        assert!(form.file_part("photo").is_some());
    }
}
