//! Support issues raised from the dashboard, and their categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// A support issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Backend id.
    pub id: u64,

    /// Short summary.
    pub title: String,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// The category, by id or expanded.
    #[serde(default)]
    pub issue_category: Option<Value>,

    /// Priority label.
    #[serde(default)]
    pub priority: Option<String>,

    /// Workflow status, e.g. `open`.
    #[serde(default)]
    pub status: Option<String>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Issue {
    type Id = u64;
    type ListParams = ();
    type CreateInput = IssueInput;
    type UpdateInput = IssueInput;

    const NAME: &'static str = "Issue";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "issue"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "issue/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "issue"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "issue/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "issue/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// Issue fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IssueInput {
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_category: Option<u64>,

    /// Priority label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Workflow status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ResourcePayload for IssueInput {}

/// A category issues are filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueCategory {
    /// Backend id.
    pub id: u64,
    /// Category name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl RestResource for IssueCategory {
    type Id = u64;
    type ListParams = ();
    type CreateInput = IssueCategoryInput;
    type UpdateInput = IssueCategoryInput;

    const NAME: &'static str = "Issue category";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "issue-category"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "issue-category/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "issue-category",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "issue-category/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "issue-category/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// Category fields. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IssueCategoryInput {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ResourcePayload for IssueCategoryInput {}
