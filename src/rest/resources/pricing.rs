//! Pricing plans shown on the public pricing section.

use serde::{Deserialize, Serialize};

use crate::rest::{
    ordering, ResourceOperation, ResourcePath, ResourcePayload, RestResource, SortOrder,
};
use crate::HttpMethod;

/// A pricing plan. `price` is a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingPlan {
    /// Backend id.
    pub id: u64,

    /// Plan name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Price as a decimal string.
    pub price: String,

    /// Billing period label ("month", "year").
    #[serde(default)]
    pub price_unit: Option<String>,

    /// Highlights the plan as the recommended one.
    #[serde(default)]
    pub is_popular: bool,

    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,

    /// Call-to-action label.
    #[serde(default)]
    pub button_text: Option<String>,

    /// Display position, ascending.
    #[serde(default)]
    pub order: Option<i64>,
}

impl RestResource for PricingPlan {
    type Id = u64;
    type ListParams = PricingListParams;
    type CreateInput = PricingPlanInput;
    type UpdateInput = PricingPlanInput;

    const NAME: &'static str = "Pricing plan";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "our-pricing"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "our-pricing/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "our-pricing"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "our-pricing/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "our-pricing/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// Filters for listing plans.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PricingListParams {
    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Sort expression, e.g. `-created_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
}

impl PricingListParams {
    /// Sorts by `field` in `order`.
    #[must_use]
    pub fn sorted_by(mut self, field: &str, order: SortOrder) -> Self {
        self.ordering = Some(ordering(field, order));
        self
    }
}

/// Plan fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PricingPlanInput {
    /// Plan name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Billing period label, e.g. `month`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<String>,

    /// Highlights the plan as the recommended one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,

    /// Feature bullet points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,

    /// Call-to-action label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    /// Display position, ascending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl ResourcePayload for PricingPlanInput {}
