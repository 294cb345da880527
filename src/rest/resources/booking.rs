//! Booking submissions.
//!
//! Bookings are rows of the built-in `booking` collection. Their payload is
//! free-form, so it is exposed as a JSON map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::AuthPolicy;
use crate::rest::resources::BasicListParams;
use crate::rest::{ResourceOperation, ResourcePath, ResourcePayload, RestResource};
use crate::HttpMethod;

/// A submitted booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Backend id.
    pub id: u64,

    /// The submitted form fields.
    #[serde(default)]
    pub data: Map<String, Value>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Returns a single field of the booking payload.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }
}

impl RestResource for Booking {
    type Id = u64;
    type ListParams = BasicListParams;
    type CreateInput = BookingUpdate;
    type UpdateInput = BookingUpdate;

    const NAME: &'static str = "Booking";
    const AUTH: AuthPolicy = AuthPolicy::Anonymous;

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "collections/booking/data",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "collections/booking/data/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "collections/booking/data/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        Some(self.id)
    }
}

/// New booking fields. Sent as `{"data": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BookingUpdate {
    /// Fields to merge into the booking data.
    pub data: Map<String, Value>,
}

impl BookingUpdate {
    /// Wraps a set of fields.
    #[must_use]
    pub const fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Adds one field.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }
}

impl ResourcePayload for BookingUpdate {}
