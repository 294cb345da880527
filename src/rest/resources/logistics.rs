//! Courier (logistics) integrations.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resources::common::flexible_id;
use crate::rest::{
    page_from_response, send_custom, Page, ResourceError, ResourceOperation, ResourcePath,
    ResourcePayload, RestResource,
};
use crate::HttpMethod;

/// A supported courier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LogisticsProvider {
    /// Dash Logistics.
    Dash,
    /// YDM courier.
    #[serde(rename = "YDM")]
    Ydm,
}

impl LogisticsProvider {
    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dash => "Dash",
            Self::Ydm => "YDM",
        }
    }
}

impl fmt::Display for LogisticsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials for one courier account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Logistics {
    /// Backend id, serialized as a number or a string.
    #[serde(default, deserialize_with = "flexible_id", skip_serializing)]
    pub id: Option<String>,

    /// Logistics provider.
    pub logistic: LogisticsProvider,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Logistics account password.
    #[serde(default)]
    pub password: Option<String>,

    /// Provider API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Whether the integration is enabled.
    #[serde(default)]
    pub is_enabled: bool,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for Logistics {
    type Id = String;
    type ListParams = ();
    type CreateInput = LogisticsInput;
    type UpdateInput = LogisticsInput;

    const NAME: &'static str = "Logistics config";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "logistics/list",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "logistics/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "logistics"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "logistics/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "logistics/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl Logistics {
    /// Lists the accounts for one courier.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error.
    pub async fn by_provider(
        client: &RestClient,
        provider: LogisticsProvider,
    ) -> Result<Page<Self>, ResourceError> {
        let query = vec![("logistic".to_string(), provider.to_string())];
        let response = send_custom::<Self>(
            client,
            ResourceOperation::All,
            HttpMethod::Get,
            "logistics",
            None,
            query.clone(),
        )
        .await?;
        page_from_response(response, &query)
    }
}

/// Courier account fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LogisticsInput {
    /// Logistics provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistic: Option<LogisticsProvider>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Logistics account password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Provider API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Whether the integration is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

impl ResourcePayload for LogisticsInput {}
