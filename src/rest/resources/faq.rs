//! Frequently asked questions.

use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// A question and its answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    /// Backend id.
    pub id: u64,
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

impl RestResource for Faq {
    type Id = u64;
    type ListParams = ();
    type CreateInput = FaqInput;
    type UpdateInput = FaqInput;

    const NAME: &'static str = "FAQ";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "faq"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "faq/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "faq"),
        ResourcePath::new(HttpMethod::Patch, ResourceOperation::Update, &["id"], "faq/{id}"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "faq/{id}"),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// FAQ fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FaqInput {
    /// The question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    /// The answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl ResourcePayload for FaqInput {}
