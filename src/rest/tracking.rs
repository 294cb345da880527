//! Dirty tracking for partial updates.
//!
//! [`TrackedResource<T>`] remembers the JSON state a record had when it was
//! fetched. [`save_changes`](TrackedResource::save_changes) sends a PATCH
//! containing only the top-level fields that differ, so fields edited
//! elsewhere in the meantime are not overwritten.
//!
//! # Example
//!
//! ```rust
//! use nepdora_api::rest::TrackedResource;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Faq {
//!     id: u64,
//!     question: String,
//!     answer: String,
//! }
//!
//! let mut faq = TrackedResource::from_existing(Faq {
//!     id: 1,
//!     question: "Do you ship?".to_string(),
//!     answer: "Yes".to_string(),
//! });
//! assert!(!faq.is_dirty());
//!
//! faq.answer = "Yes, nationwide".to_string();
//! assert!(faq.is_dirty());
//!
//! let changes = faq.changed_fields();
//! assert_eq!(changes["answer"], "Yes, nationwide");
//! assert!(changes.get("question").is_none());
//! ```

use std::ops::{Deref, DerefMut};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{RequestBody, RestClient};
use crate::rest::resource::send_operation;
use crate::rest::{PathIds, ResourceError, ResourceOperation, RestResource};

/// A record plus the state it had when loaded or last saved.
#[derive(Debug, Clone)]
pub struct TrackedResource<T> {
    resource: T,
    original_state: Option<Value>,
}

impl<T: Serialize> TrackedResource<T> {
    /// Wraps a record that does not exist on the server yet.
    ///
    /// Every field counts as changed.
    #[must_use]
    pub const fn new(resource: T) -> Self {
        Self {
            resource,
            original_state: None,
        }
    }

    /// Wraps a record fetched from the server. It starts clean.
    #[must_use]
    pub fn from_existing(resource: T) -> Self {
        let original_state = serde_json::to_value(&resource).ok();
        Self {
            resource,
            original_state,
        }
    }

    /// Returns `true` if the record differs from its original state.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match &self.original_state {
            None => true,
            Some(original) => serde_json::to_value(&self.resource).ok().as_ref() != Some(original),
        }
    }

    /// Returns the changed top-level fields as a JSON object.
    ///
    /// Removed fields are not reported; a PATCH cannot express them.
    #[must_use]
    pub fn changed_fields(&self) -> Value {
        let current = serde_json::to_value(&self.resource).unwrap_or(Value::Null);
        match &self.original_state {
            None => current,
            Some(original) => diff_top_level(original, &current),
        }
    }

    /// Captures the current state as the new original.
    pub fn mark_clean(&mut self) {
        self.original_state = serde_json::to_value(&self.resource).ok();
    }

    /// Returns `true` if the record was never loaded or saved.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.original_state.is_none()
    }

    /// Unwraps the record.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.resource
    }
}

impl<T: RestResource + Serialize> TrackedResource<T> {
    /// Sends the changed fields as a PATCH and adopts the server's reply.
    ///
    /// Does nothing when the record is clean.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the record has no
    /// id, or the mapped HTTP error.
    pub async fn save_changes(&mut self, client: &RestClient) -> Result<(), ResourceError> {
        self.save_changes_in(client, PathIds::new()).await
    }

    /// Like [`save_changes`](Self::save_changes) for nested resources.
    ///
    /// # Errors
    ///
    /// See [`save_changes`](Self::save_changes).
    pub async fn save_changes_in(
        &mut self,
        client: &RestClient,
        mut parent: PathIds,
    ) -> Result<(), ResourceError> {
        if !self.is_dirty() {
            return Ok(());
        }

        let id = self
            .resource
            .get_id()
            .ok_or(ResourceError::PathResolutionFailed {
                resource: T::NAME,
                operation: ResourceOperation::Update.as_str(),
            })?;
        parent.insert(T::ID_KEY, id.to_string());

        let body = RequestBody::Json(self.changed_fields());
        let response =
            send_operation::<T>(client, ResourceOperation::Update, parent, Some(body), Vec::new())
                .await?;

        if let Some(updated) = response.decode_optional::<T>()? {
            self.resource = updated;
        }
        self.mark_clean();
        Ok(())
    }
}

fn diff_top_level(original: &Value, current: &Value) -> Value {
    match (original, current) {
        (Value::Object(before), Value::Object(after)) => {
            let diff: Map<String, Value> = after
                .iter()
                .filter(|(key, value)| before.get(*key) != Some(*value))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            Value::Object(diff)
        }
        _ if original == current => Value::Object(Map::new()),
        _ => current.clone(),
    }
}

impl<T> Deref for TrackedResource<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<T> DerefMut for TrackedResource<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.resource
    }
}
