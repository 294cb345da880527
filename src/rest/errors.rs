//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for resource operations, extending the
//! base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound` and `ValidationFailed`.
//!
//! # Error Handling
//!
//! HTTP status codes map to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **400 / 422**: [`ResourceError::ValidationFailed`] - Field errors from the API
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - The normalized HTTP error
//!
//! When the server supplied no readable message, the error carries a
//! resource-specific fallback such as `Failed to update testimonial`.
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::rest::{RestResource, ResourceError};
//! use nepdora_api::rest::resources::Faq;
//!
//! match Faq::find(&client, 12).await {
//!     Ok(faq) => println!("Found: {}", faq.question),
//!     Err(ResourceError::NotFound { message, .. }) => println!("{message}"),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, HttpResponseError, ResponseDecodeError, RestError};
use crate::rest::{PayloadError, ResourceOperation};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use nepdora_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Service",
///     id: "web-design".to_string(),
///     message: "Not found.".to_string(),
/// };
/// assert_eq!(error.to_string(), "Not found.");
/// assert_eq!(error.status(), Some(404));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// The resource name (e.g., "Service", "Order").
        resource: &'static str,
        /// The id or slug that was requested, or `unknown` for list calls.
        id: String,
        /// The server message, or a generated one.
        message: String,
    },

    /// The API rejected the payload (HTTP 400 or 422).
    #[error("{message}")]
    ValidationFailed {
        /// The resource name.
        resource: &'static str,
        /// The HTTP status code (400 or 422).
        code: u16,
        /// Field name to messages, as reported by the backend.
        errors: HashMap<String, Vec<String>>,
        /// The server message, or a resource-specific fallback.
        message: String,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// No path matches the provided ids and operation.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// An id, slug or parent id was blank, so no request was sent.
    #[error("{resource} {key} must not be empty")]
    InvalidId {
        /// The resource name.
        resource: &'static str,
        /// The path placeholder that was blank (e.g., `id`, `slug`).
        key: &'static str,
    },

    /// The request payload or query could not be encoded.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    /// A successful response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] ResponseDecodeError),

    /// An HTTP-level error that has no more specific variant.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST client error (invalid path).
    #[error(transparent)]
    Rest(RestError),
}

impl ResourceError {
    /// Maps a REST client error into a resource error.
    ///
    /// Response errors are classified by status. Messages the server did not
    /// supply are replaced with `Failed to {verb} {resource}` (or
    /// `{resource} with id {id} not found` for 404).
    #[must_use]
    pub fn from_rest(
        error: RestError,
        resource: &'static str,
        operation: ResourceOperation,
        id: Option<&str>,
    ) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) => {
                Self::from_response_error(response, resource, operation, id)
            }
            RestError::Http(other) => Self::Http(other),
            other @ RestError::InvalidPath { .. } => Self::Rest(other),
        }
    }

    fn from_response_error(
        mut response: HttpResponseError,
        resource: &'static str,
        operation: ResourceOperation,
        id: Option<&str>,
    ) -> Self {
        let fallback = fallback_message(resource, operation);
        match response.code {
            404 => {
                let id = id.unwrap_or("unknown").to_string();
                let message = if response.server_message {
                    response.message
                } else {
                    format!("{resource} with id {id} not found")
                };
                Self::NotFound {
                    resource,
                    id,
                    message,
                }
            }
            400 | 422 => Self::ValidationFailed {
                resource,
                code: response.code,
                errors: response.field_errors(),
                message: if response.server_message {
                    response.message
                } else {
                    fallback
                },
                request_id: response.error_reference,
            },
            _ => {
                if !response.server_message {
                    response.message = fallback;
                }
                Self::Http(HttpError::Response(response))
            }
        }
    }

    /// Returns the HTTP status code, if the server responded.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { code, .. } => Some(*code),
            Self::Http(e) => e.status(),
            Self::Rest(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Builds `Failed to {verb} {resource}` with a lower-cased resource name.
#[must_use]
pub fn fallback_message(resource: &str, operation: ResourceOperation) -> String {
    format!("Failed to {} {}", operation.verb(), resource.to_lowercase())
}
