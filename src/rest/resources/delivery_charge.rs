//! Delivery charges per location.
//!
//! Each location has a base price plus weight-banded prices. The tenant also
//! has a set of default charges that can be edited and loaded into the
//! per-location table.

use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resources::BasicListParams;
use crate::rest::{
    page_from_response, send_custom, Page, ResourceError, ResourceOperation, ResourcePath,
    ResourcePayload, RestResource,
};
use crate::HttpMethod;

/// Prices for one delivery location. Amounts are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryCharge {
    /// Backend id.
    pub id: u64,

    /// Delivery location.
    #[serde(default)]
    pub location_name: Option<String>,

    /// Flat default cost.
    #[serde(default)]
    pub default_cost: Option<String>,

    /// Cost up to 1 kg.
    #[serde(default)]
    pub cost_0_1kg: Option<String>,

    /// Cost for 1 to 2 kg.
    #[serde(default)]
    pub cost_1_2kg: Option<String>,

    /// Cost for 2 to 3 kg.
    #[serde(default)]
    pub cost_2_3kg: Option<String>,

    /// Cost for 3 to 5 kg.
    #[serde(default)]
    pub cost_3_5kg: Option<String>,

    /// Cost for 5 to 10 kg.
    #[serde(default)]
    pub cost_5_10kg: Option<String>,

    /// Cost above 10 kg.
    #[serde(default)]
    pub cost_above_10kg: Option<String>,

    /// Whether this is the default rate.
    #[serde(default)]
    pub is_default: bool,
}

impl RestResource for DeliveryCharge {
    type Id = u64;
    type ListParams = BasicListParams;
    type CreateInput = DeliveryChargeInput;
    type UpdateInput = DeliveryChargeInput;

    const NAME: &'static str = "Delivery charge";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "delivery-charges",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "delivery-charges",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "delivery-charges/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// The `{"default_price": [...]}` envelope of the defaults endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultDeliveryCharges {
    /// Default rates.
    #[serde(default)]
    pub default_price: Vec<DeliveryCharge>,
}

impl DeliveryCharge {
    /// Fetches the tenant's default charges.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error.
    pub async fn defaults(client: &RestClient) -> Result<Vec<Self>, ResourceError> {
        let response = send_custom::<Self>(
            client,
            ResourceOperation::All,
            HttpMethod::Get,
            "default-delivery-charges",
            None,
            Vec::new(),
        )
        .await?;
        let envelope: DefaultDeliveryCharges = response.decode()?;
        Ok(envelope.default_price)
    }

    /// Updates one of the default charges. Location and default flag are
    /// not editable.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if a price is rejected.
    pub async fn update_default(
        client: &RestClient,
        id: u64,
        prices: &DeliveryChargeInput,
    ) -> Result<Self, ResourceError> {
        let prices = DeliveryChargeInput {
            location_name: None,
            ..prices.clone()
        };
        Self::update(client, id, &prices).await
    }

    /// Copies the default charges into the per-location table and returns
    /// the resulting list.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error.
    pub async fn load_defaults(client: &RestClient) -> Result<Page<Self>, ResourceError> {
        let response = send_custom::<Self>(
            client,
            ResourceOperation::Create,
            HttpMethod::Post,
            "delivery-charges/load-default",
            None,
            Vec::new(),
        )
        .await?;
        page_from_response(response, &[])
    }
}

/// Charge fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryChargeInput {
    /// Delivery location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    /// Flat default cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cost: Option<String>,

    /// Cost up to 1 kg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_0_1kg: Option<String>,

    /// Cost for 1 to 2 kg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_1_2kg: Option<String>,

    /// Cost for 2 to 3 kg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_2_3kg: Option<String>,

    /// Cost for 3 to 5 kg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_3_5kg: Option<String>,

    /// Cost for 5 to 10 kg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_5_10kg: Option<String>,

    /// Cost above 10 kg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_above_10kg: Option<String>,
}

impl ResourcePayload for DeliveryChargeInput {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_defaults_envelope() {
        let envelope: DefaultDeliveryCharges = serde_json::from_str(
            r#"{"default_price": [{"id": 1, "location_name": "Kathmandu", "default_cost": "100.00", "is_default": true}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.default_price.len(), 1);
        assert!(envelope.default_price[0].is_default);
    }

    #[test]
    fn test_input_only_sends_set_prices() {
        let input = DeliveryChargeInput {
            cost_0_1kg: Some("120".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"cost_0_1kg":"120"}"#
        );
    }

    #[test]
    fn test_paths() {
        let update = get_path(DeliveryCharge::PATHS, ResourceOperation::Update, &["id"]).unwrap();
        assert_eq!(update.template, "delivery-charges/{id}");
        assert!(get_path(DeliveryCharge::PATHS, ResourceOperation::Find, &["id"]).is_none());
    }
}
