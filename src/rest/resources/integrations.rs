//! Third-party integration settings: WhatsApp chat, Facebook page and
//! Google Analytics.
//!
//! WhatsApp and Google Analytics configs are addressed by string ids; the
//! backend may still serialize them as numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::resources::common::flexible_id;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// WhatsApp chat button settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhatsApp {
    /// Backend id, serialized as a number or a string.
    #[serde(default, deserialize_with = "flexible_id", skip_serializing)]
    pub id: Option<String>,

    /// Phone number in international format.
    pub phone_number: String,

    /// Pre-filled chat message.
    #[serde(default)]
    pub message: Option<String>,

    /// Whether the integration is enabled.
    #[serde(default)]
    pub is_enabled: bool,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for WhatsApp {
    type Id = String;
    type ListParams = ();
    type CreateInput = WhatsAppInput;
    type UpdateInput = WhatsAppInput;

    const NAME: &'static str = "WhatsApp config";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "whatsapp"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "whatsapp/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "whatsapp"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "whatsapp/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "whatsapp/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

/// WhatsApp fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WhatsAppInput {
    /// Phone number in international format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Prefilled chat message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Whether the integration is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

impl ResourcePayload for WhatsAppInput {}

/// A connected Facebook page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacebookIntegration {
    /// Backend id.
    pub id: u64,

    /// Facebook page id.
    pub page_id: String,

    /// Facebook page name.
    #[serde(default)]
    pub page_name: Option<String>,

    /// Page access token used by the backend.
    #[serde(default)]
    pub page_access_token: Option<String>,

    /// Facebook app id.
    #[serde(default)]
    pub app_id: Option<String>,

    /// Whether the integration is enabled.
    #[serde(default)]
    pub is_enabled: bool,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for FacebookIntegration {
    type Id = u64;
    type ListParams = ();
    type CreateInput = FacebookIntegrationInput;
    type UpdateInput = FacebookIntegrationInput;

    const NAME: &'static str = "Facebook integration";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "facebook"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "facebook/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "facebook"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "facebook/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "facebook/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// Facebook page fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FacebookIntegrationInput {
    /// Facebook page id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,

    /// Facebook page name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_name: Option<String>,

    /// Page access token used by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_access_token: Option<String>,

    /// Facebook app id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    /// Whether the integration is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

impl ResourcePayload for FacebookIntegrationInput {}

/// Google Analytics tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleAnalytics {
    /// Backend id, serialized as a number or a string.
    #[serde(default, deserialize_with = "flexible_id", skip_serializing)]
    pub id: Option<String>,

    /// `G-XXXXXXX` measurement id.
    pub measurement_id: String,

    /// Whether the integration is enabled.
    #[serde(default)]
    pub is_enabled: bool,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for GoogleAnalytics {
    type Id = String;
    type ListParams = ();
    type CreateInput = GoogleAnalyticsInput;
    type UpdateInput = GoogleAnalyticsInput;

    const NAME: &'static str = "Google Analytics config";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "google-analytic",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "google-analytic/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "google-analytic",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "google-analytic/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "google-analytic/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

/// Google Analytics fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GoogleAnalyticsInput {
    /// GA4 measurement id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,

    /// Whether the integration is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

impl ResourcePayload for GoogleAnalyticsInput {}
