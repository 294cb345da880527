//! Site popups and the submissions collected through them.
//!
//! Both are public endpoints. Popup edits replace the whole record (PUT),
//! since the builder always sends the complete form.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::rest::resources::{Popup, PopupForm};
//! use serde_json::json;
//!
//! if let Some(popup) = Popup::active(&client).await? {
//!     let fields = json!({"name": "Gita", "email": "gita@example.com"});
//!     PopupForm::submit(&client, popup.id, fields.as_object().unwrap().clone()).await?;
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::AuthPolicy;
use crate::clients::{FileAttachment, RestClient};
use crate::rest::resources::BasicListParams;
use crate::rest::{
    encode_payload, send_custom, Ack, ResourceError, ResourceOperation, ResourcePath,
    ResourcePayload, RestResource,
};
use crate::HttpMethod;

/// A popup shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Popup {
    /// Backend id.
    pub id: u64,

    /// Popup heading.
    pub title: String,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Whether the record is shown on the site.
    #[serde(default)]
    pub is_active: Option<bool>,

    /// Which form fields the popup asks for.
    #[serde(default)]
    pub enabled_fields: Vec<String>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Popup {
    type Id = u64;
    type ListParams = PopupListParams;
    type CreateInput = PopupInput;
    type UpdateInput = PopupInput;

    const NAME: &'static str = "Popup";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "popup"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "popup/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "popup"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Replace, &["id"], "popup/{id}"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "popup/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

impl Popup {
    /// Returns the popup currently shown on the site, if any.
    ///
    /// The list is filtered server side and checked again here, since the
    /// filter is advisory on some backends.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error.
    pub async fn active(client: &RestClient) -> Result<Option<Self>, ResourceError> {
        let page = Self::all(
            client,
            Some(PopupListParams {
                is_active: Some(true),
            }),
        )
        .await?;
        Ok(page
            .into_results()
            .into_iter()
            .find(|popup| popup.is_active == Some(true)))
    }
}

/// Filters for listing popups.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PopupListParams {
    /// Whether the record is shown on the site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A complete popup record, as sent on create and replace.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PopupInput {
    /// Popup heading.
    pub title: String,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the record is shown on the site.
    pub is_active: bool,

    /// Form fields shown in the popup.
    pub enabled_fields: Vec<String>,

    /// Popup image, sent as a file part.
    #[serde(skip)]
    pub image: Option<FileAttachment>,
}

impl ResourcePayload for PopupInput {
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        self.image.iter().map(|f| ("image", f)).collect()
    }
}

/// A visitor's popup submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopupForm {
    /// Backend id.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// Id of the popup the submission came from.
    pub popup: u64,

    /// Submitter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number in international format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Any further fields the popup collects.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ResourcePayload for PopupForm {}

impl RestResource for PopupForm {
    type Id = u64;
    type ListParams = PopupFormListParams;
    type CreateInput = Self;
    type UpdateInput = Self;

    const NAME: &'static str = "Popup form";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "popup-form"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "popup-form/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "popup-form"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Replace,
            &["id"],
            "popup-form/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "popup-form/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl PopupForm {
    /// Submits the fields a visitor entered into `popup`.
    ///
    /// The response body is not used; success yields
    /// `"Form submitted successfully!"`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the submission is rejected.
    pub async fn submit(
        client: &RestClient,
        popup: u64,
        fields: Map<String, Value>,
    ) -> Result<Ack, ResourceError> {
        let mut body = Map::with_capacity(fields.len() + 1);
        body.insert("popup".to_string(), Value::from(popup));
        body.extend(fields);

        send_custom::<Self>(
            client,
            ResourceOperation::Create,
            HttpMethod::Post,
            "popup-form",
            Some(encode_payload(&body)?),
            Vec::new(),
        )
        .await?;
        Ok(Ack::ok("Form submitted successfully!"))
    }
}

/// Filters for listing popup submissions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PopupFormListParams {
    /// Paging and search.
    #[serde(flatten)]
    pub basic: BasicListParams,

    /// Only submissions from this popup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, serialize_to_query};
    use serde_json::json;

    #[test]
    fn test_popup_uses_put_and_no_patch() {
        let replace = get_path(Popup::PATHS, ResourceOperation::Replace, &["id"]).unwrap();
        assert_eq!(replace.http_method, HttpMethod::Put);
        assert!(get_path(Popup::PATHS, ResourceOperation::Update, &["id"]).is_none());
        assert!(get_path(PopupForm::PATHS, ResourceOperation::Update, &["id"]).is_none());
    }

    #[test]
    fn test_popup_form_keeps_extra_fields() {
        let form: PopupForm = serde_json::from_value(json!({
            "id": 8,
            "popup": 2,
            "email": "gita@example.com",
            "company": "Acme"
        }))
        .unwrap();
        assert_eq!(form.extra["company"], "Acme");

        let sent = serde_json::to_value(&form).unwrap();
        assert!(sent.get("id").is_none());
        assert_eq!(sent["company"], "Acme");
        assert_eq!(sent["popup"], 2);
    }

    #[test]
    fn test_popup_form_filters() {
        let params = PopupFormListParams {
            basic: BasicListParams::page(1, 20),
            popup: Some(4),
        };
        let query = serialize_to_query(&params).unwrap();
        assert!(query.contains(&("popup".to_string(), "4".to_string())));
        assert!(query.contains(&("page_size".to_string(), "20".to_string())));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_popup_with_missing_active_flag() {
        let popup: Popup = serde_json::from_str(r#"{"id": 1, "title": "Sale"}"#).unwrap();
        assert!(popup.is_active.is_none());
        assert!(popup.enabled_fields.is_empty());
    }
}
