//! Client logos shown in the "our clients" section.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::clients::FileAttachment;
//! use nepdora_api::rest::RestResource;
//! use nepdora_api::rest::resources::{OurClient, OurClientInput};
//!
//! let acme = OurClient::create(&client, &OurClientInput {
//!     name: Some("Acme".to_string()),
//!     logo: Some(FileAttachment::new("acme.png", bytes)),
//!     ..Default::default()
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthPolicy;
use crate::clients::FileAttachment;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// A client of the site owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OurClient {
    /// Backend id.
    pub id: u64,

    /// Client name.
    pub name: String,

    /// Website of the client.
    #[serde(default)]
    pub url: Option<String>,

    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for OurClient {
    type Id = u64;
    type ListParams = OurClientListParams;
    type CreateInput = OurClientInput;
    type UpdateInput = OurClientInput;

    const NAME: &'static str = "Client";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "our-client"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "our-client"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "our-client/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "our-client/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// Filters for listing clients.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OurClientListParams {
    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Client fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OurClientInput {
    /// Client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Client website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Logo, sent as a file part.
    #[serde(skip)]
    pub logo: Option<FileAttachment>,
}

impl ResourcePayload for OurClientInput {
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        self.logo.iter().map(|f| ("logo", f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::encode_payload;

    #[test]
    fn test_logo_upload_is_multipart() {
        let input = OurClientInput {
            name: Some("Acme".to_string()),
            url: None,
            logo: Some(FileAttachment::new("acme.png", vec![1, 2, 3]).with_mime("image/png")),
        };
        let body = encode_payload(&input).unwrap();
        let form = body.as_form().unwrap();
        assert_eq!(form.text_values("name"), vec!["Acme"]);
        assert!(form.text_values("url").is_empty());
        assert_eq!(form.file_part("logo").unwrap().mime(), Some("image/png"));
    }
}
