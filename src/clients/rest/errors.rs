//! REST-specific error types.
//!
//! - [`RestError::InvalidPath`]: When a resource path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::clients::rest::{RestClient, RestError};
//! use nepdora_api::AuthPolicy;
//!
//! match client.get("faq", Vec::new(), AuthPolicy::Admin).await {
//!     Ok(response) => println!("FAQs: {:?}", response.body),
//!     Err(RestError::InvalidPath { path }) => {
//!         println!("Invalid path: {}", path);
//!     }
//!     Err(RestError::Http(e)) => {
//!         println!("HTTP error: {}", e);
//!     }
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST operations.
///
/// # Example
///
/// ```rust
/// use nepdora_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The resource path is invalid.
    ///
    /// Returned when a path is empty after normalization or contains a
    /// query string or fragment.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code, if the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::InvalidPath { .. } => None,
        }
    }
}
