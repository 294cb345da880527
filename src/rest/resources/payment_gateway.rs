//! Payment gateway configurations (Khalti, eSewa).

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

/// A supported payment provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Khalti wallet.
    Khalti,
    /// eSewa wallet.
    Esewa,
}

impl PaymentType {
    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Khalti => "khalti",
            Self::Esewa => "esewa",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials and state of one gateway.
///
/// `Debug` output masks `secret_key`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentGateway {
    /// Backend id, serialized as a number or a string.
    #[serde(default, deserialize_with = "flexible_id", skip_serializing)]
    pub id: Option<String>,

    /// The provider this configuration belongs to.
    pub payment_type: PaymentType,

    /// Merchant or service code issued by the provider.
    #[serde(default)]
    pub merchant_code: Option<String>,

    /// Provider secret. Never printed by `Debug`.
    #[serde(default)]
    pub secret_key: Option<String>,

    /// Provider public key.
    #[serde(default)]
    pub public_key: Option<String>,

    /// Whether checkout offers this gateway.
    #[serde(default)]
    pub is_enabled: bool,

    /// Creation timestamp.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn masked(secret: Option<&String>) -> Option<&'static str> {
    secret.map(|_| "*****")
}

impl fmt::Debug for PaymentGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentGateway")
            .field("id", &self.id)
            .field("payment_type", &self.payment_type)
            .field("merchant_code", &self.merchant_code)
            .field("secret_key", &masked(self.secret_key.as_ref()))
            .field("public_key", &self.public_key)
            .field("is_enabled", &self.is_enabled)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl RestResource for PaymentGateway {
    type Id = String;
    type ListParams = ();
    type CreateInput = PaymentGatewayInput;
    type UpdateInput = PaymentGatewayInput;

    const NAME: &'static str = "Payment gateway config";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "payment-gateway/list",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "payment-gateway/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "payment-gateway",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "payment-gateway/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "payment-gateway/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl PaymentGateway {
    /// Lists the configurations for one provider.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error.
    pub async fn by_type(
        client: &RestClient,
        payment_type: PaymentType,
    ) -> Result<Page<Self>, ResourceError> {
        let query = vec![("payment_type".to_string(), payment_type.to_string())];
        let response = send_custom::<Self>(
            client,
            ResourceOperation::All,
            HttpMethod::Get,
            "payment-gateway",
            None,
            query.clone(),
        )
        .await?;
        page_from_response(response, &query)
    }
}

/// Gateway fields. Unset fields are not sent.
///
/// `Debug` output masks `secret_key`.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentGatewayInput {
    /// Provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

    /// Merchant or service code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,

    /// Provider secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// Provider public key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    /// Enables or disables the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
}

impl fmt::Debug for PaymentGatewayInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentGatewayInput")
            .field("payment_type", &self.payment_type)
            .field("merchant_code", &self.merchant_code)
            .field("secret_key", &masked(self.secret_key.as_ref()))
            .field("public_key", &self.public_key)
            .field("is_enabled", &self.is_enabled)
            .finish()
    }
}

impl ResourcePayload for PaymentGatewayInput {}
