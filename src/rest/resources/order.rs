//! Storefront orders.
//!
//! Orders are placed from the storefront, anonymously or with the signed-in
//! customer's token, and managed from the dashboard with the admin token.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::AuthPolicy;
//! use nepdora_api::rest::RestResource;
//! use nepdora_api::rest::resources::{Order, OrderInput, OrderListParams, OrderStatus};
//!
//! let placed = Order::create_as(&client, &input, AuthPolicy::Customer).await?;
//!
//! let manual = Order::all(&client, Some(OrderListParams {
//!     is_manual: true,
//!     ..Default::default()
//! })).await?;
//!
//! Order::update_status(&client, placed.id, OrderStatus::Shipped).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::AuthPolicy;
use crate::clients::RestClient;
use crate::rest::{
    encode_payload, send_custom_as, ResourceError, ResourceOperation, ResourcePath,
    ResourcePayload, RestResource,
};
use crate::HttpMethod;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting confirmation.
    Pending,
    /// Confirmed by the store.
    Confirmed,
    /// Being packed.
    Processing,
    /// Handed to the courier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled.
    Cancelled,
    /// Any status this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// The wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

/// A line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Backend id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Product id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Product variant id, when the product has variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// Units ordered.
    pub quantity: u32,

    /// Unit price as a decimal string.
    pub price: String,

    /// Expanded product details, when the backend includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Value>,
}

/// An order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Backend id.
    pub id: u64,

    /// Human-readable order number.
    #[serde(default)]
    pub order_number: Option<String>,

    /// Customer full name.
    #[serde(default)]
    pub customer_name: String,

    /// Customer email address.
    #[serde(default)]
    pub customer_email: Option<String>,

    /// Customer phone number.
    #[serde(default)]
    pub customer_phone: Option<String>,

    /// Customer address.
    #[serde(default)]
    pub customer_address: Option<String>,

    /// Delivery address.
    #[serde(default)]
    pub shipping_address: Option<String>,

    /// City.
    #[serde(default)]
    pub city: Option<String>,

    /// Delivery charge as a decimal string.
    #[serde(default)]
    pub delivery_charge: Option<String>,

    /// Order total as a decimal string.
    #[serde(default)]
    pub total_amount: Option<String>,

    /// Fulfilment status.
    pub status: OrderStatus,

    /// Whether payment was received.
    #[serde(default)]
    pub is_paid: bool,

    /// Payment method used.
    #[serde(default)]
    pub payment_type: Option<String>,

    /// Whether the order was entered from the dashboard.
    #[serde(default)]
    pub is_manual: bool,

    /// Ordered line items.
    #[serde(default)]
    pub items: Vec<OrderItem>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Order {
    type Id = u64;
    type ListParams = OrderListParams;
    type CreateInput = OrderInput;
    type UpdateInput = OrderUpdate;

    const NAME: &'static str = "Order";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "order"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "order/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "order"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "order/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    /// Places an order without credentials.
    ///
    /// Use [`Order::create_as`] to attach the customer's token.
    async fn create(client: &RestClient, input: &OrderInput) -> Result<Self, ResourceError> {
        Self::create_as(client, input, AuthPolicy::Anonymous).await
    }
}

impl Order {
    /// Places an order with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the order is rejected.
    pub async fn create_as(
        client: &RestClient,
        input: &OrderInput,
        auth: AuthPolicy,
    ) -> Result<Self, ResourceError> {
        let body = encode_payload(input)?;
        let response = send_custom_as::<Self>(
            client,
            ResourceOperation::Create,
            HttpMethod::Post,
            "order",
            Some(body),
            Vec::new(),
            auth,
        )
        .await?;
        Ok(response.decode()?)
    }

    /// Sets the fulfilment status.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the order does not exist.
    pub async fn update_status(
        client: &RestClient,
        id: u64,
        status: OrderStatus,
    ) -> Result<Self, ResourceError> {
        let update = OrderUpdate {
            status: Some(status),
            ..OrderUpdate::default()
        };
        Self::update(client, id, &update).await
    }

    /// Records payment details.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the order does not exist.
    pub async fn update_payment(
        client: &RestClient,
        id: u64,
        is_paid: bool,
        payment_type: Option<&str>,
    ) -> Result<Self, ResourceError> {
        let update = OrderUpdate {
            is_paid: Some(is_paid),
            payment_type: payment_type.map(str::to_string),
            ..OrderUpdate::default()
        };
        Self::update(client, id, &update).await
    }
}

fn skip_status(status: &Option<String>) -> bool {
    status
        .as_deref()
        .map_or(true, |s| s.trim().eq_ignore_ascii_case("all"))
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Filters for listing orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// A status value, or `"all"` for no filter.
    #[serde(skip_serializing_if = "skip_status")]
    pub status: Option<String>,

    /// Only manually entered orders. Not sent when false.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_manual: bool,
}

/// A line of a new order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItemInput {
    /// Product id.
    pub product_id: u64,

    /// Product variant id, when the product has variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// Units ordered.
    pub quantity: u32,

    /// Unit price as a decimal string.
    pub price: String,
}

/// A new order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderInput {
    /// Customer full name.
    pub customer_name: String,

    /// Customer email address.
    pub customer_email: String,

    /// Customer phone number.
    pub customer_phone: String,

    /// Customer address.
    pub customer_address: String,

    /// Delivery address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Delivery charge as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_charge: Option<String>,

    /// Order total as a decimal string.
    pub total_amount: String,

    /// Payment method used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    /// Note from the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Whether the order was entered from the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manual: Option<bool>,

    /// Line items to order.
    pub items: Vec<OrderItemInput>,
}

impl ResourcePayload for OrderInput {}

/// A partial order update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderUpdate {
    /// New fulfilment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Whether payment was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,

    /// Payment method used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    /// Gateway transaction reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl ResourcePayload for OrderUpdate {}
