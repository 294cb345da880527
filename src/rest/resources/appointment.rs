//! Appointment resources.
//!
//! Appointments are booked by site visitors, so the endpoints are public:
//! requests carry no `Authorization` header.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::rest::RestResource;
//! use nepdora_api::rest::resources::{
//!     Appointment, AppointmentListParams, AppointmentStatus, AppointmentUpdate,
//! };
//!
//! let pending = Appointment::all(&client, Some(AppointmentListParams {
//!     status: Some(AppointmentStatus::Pending),
//!     ..Default::default()
//! })).await?;
//!
//! let confirmed = Appointment::update(&client, 5, &AppointmentUpdate {
//!     status: Some(AppointmentStatus::Confirmed),
//!     ..Default::default()
//! }).await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::AuthPolicy;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// Lifecycle of an appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked, awaiting confirmation.
    Pending,
    /// Confirmed by the site owner.
    Confirmed,
    /// Took place.
    Completed,
    /// Cancelled by either side.
    Cancelled,
}

/// A booked appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Read-only.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Visitor's full name.
    #[serde(default)]
    pub full_name: String,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Requested day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Requested time slot, as sent by the backend (`"10:30:00"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// The selected [`AppointmentReason`], by id or as an expanded object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Value>,

    /// Message left with the booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Current status.
    pub status: AppointmentStatus,

    /// Creation timestamp.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RestResource for Appointment {
    type Id = u64;
    type ListParams = AppointmentListParams;
    type CreateInput = AppointmentInput;
    type UpdateInput = AppointmentUpdate;

    const NAME: &'static str = "Appointment";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "appointments"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "appointments/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "appointments"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "appointments/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "appointments/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Filters for listing appointments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppointmentListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Matches name, email or phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Only appointments in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,

    /// Inclusive lower bound on `date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper bound on `date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,

    /// Exact time slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// A new appointment request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppointmentInput {
    /// Full name.
    pub full_name: String,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Requested date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Time slot, as `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Id of an [`AppointmentReason`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<u64>,

    /// Message left with the booking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResourcePayload for AppointmentInput {}

/// A partial appointment update. Unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppointmentUpdate {
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,

    /// Requested date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Time slot, as `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Message left with the booking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResourcePayload for AppointmentUpdate {}

/// A selectable reason shown on the booking form. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentReason {
    /// Backend id.
    pub id: u64,
    /// Reason label.
    pub name: String,
}

impl RestResource for AppointmentReason {
    type Id = u64;
    type ListParams = ();
    type CreateInput = Value;
    type UpdateInput = Value;

    const NAME: &'static str = "Appointment reason";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "appointment-reasons",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}
