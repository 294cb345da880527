//! Promo codes and checkout validation.
//!
//! A rejected code comes back as a 400 with a field error
//! (`{"code": ["Invalid promo code"]}`); that message is surfaced through
//! [`ResourceError::ValidationFailed`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::clients::RestClient;
use crate::rest::resources::BasicListParams;
use crate::rest::{
    encode_payload, send_custom, ResourceError, ResourceOperation, ResourcePath, ResourcePayload,
    RestResource,
};
use crate::HttpMethod;

/// A discount code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromoCode {
    /// Backend id.
    pub id: u64,

    /// The code customers enter.
    pub code: String,

    /// Discount as a decimal string.
    pub discount_percentage: String,

    /// Redemption limit; `None` means unlimited.
    #[serde(default)]
    pub max_uses: Option<u32>,

    /// Times the code was redeemed.
    #[serde(default)]
    pub used_count: u32,

    /// First day the code is accepted.
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,

    /// Last day the code is accepted.
    #[serde(default)]
    pub valid_to: Option<DateTime<Utc>>,

    /// Whether the record is shown on the site.
    #[serde(default)]
    pub is_active: bool,
}

impl RestResource for PromoCode {
    type Id = u64;
    type ListParams = BasicListParams;
    type CreateInput = PromoCodeInput;
    type UpdateInput = PromoCodeInput;

    const NAME: &'static str = "Promo code";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "promocode"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "promocode/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "promocode"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "promocode/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "promocode/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// Result of validating a code at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoCodeValidation {
    /// Whether the code can be applied.
    #[serde(default)]
    pub valid: bool,

    /// Reason shown to the customer.
    #[serde(default)]
    pub message: Option<String>,

    /// The validated code.
    #[serde(default)]
    pub code: Option<String>,

    /// Discount as a decimal percentage string.
    #[serde(default)]
    pub discount_percentage: Option<String>,

    /// Other fields returned by the validator.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PromoCode {
    /// Checks whether `code` can be applied.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] with the server's message
    /// when the code is unknown, expired or used up.
    pub async fn validate(
        client: &RestClient,
        code: &str,
    ) -> Result<PromoCodeValidation, ResourceError> {
        let body = encode_payload(&json!({ "code": code.trim() }))?;
        let response = send_custom::<Self>(
            client,
            ResourceOperation::Create,
            HttpMethod::Post,
            "promocode/validate",
            Some(body),
            Vec::new(),
        )
        .await?;
        Ok(response.decode()?)
    }
}

/// Promo code fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PromoCodeInput {
    /// The code customers enter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Discount as a decimal percentage string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<String>,

    /// Redemption limit; `None` means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,

    /// First day the code is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,

    /// Last day the code is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,

    /// Whether the record is shown on the site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ResourcePayload for PromoCodeInput {}
