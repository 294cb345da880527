//! HTTP-specific error types and the error normalizer.
//!
//! Every non-2xx response is turned into an [`HttpResponseError`] by
//! [`HttpResponseError::normalize`]. Resource clients never look at status
//! codes themselves; they only see the normalized error.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {:?}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("{}", e);
//!     }
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// Keys checked, in order, for a human-readable error message.
const MESSAGE_KEYS: [&str; 4] = ["detail", "message", "error", "non_field_errors"];

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is the best-effort text extracted from the response body,
/// falling back to a generic status message.
///
/// # Example
///
/// ```rust
/// use nepdora_api::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::normalize(404, Some(&json!({"detail": "Not found."})), "", None);
/// assert_eq!(error.code, 404);
/// assert_eq!(error.message, "Not found.");
/// assert!(error.server_message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable error message.
    pub message: String,
    /// Whether `message` came from the response body.
    pub server_message: bool,
    /// The parsed JSON body, if the response carried one.
    pub body: Option<Value>,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Builds the normalized error for a failed response.
    ///
    /// `body` is the parsed JSON body when there is one; `raw` is the body
    /// text, used when the server replied with a short plain-text message.
    #[must_use]
    pub fn normalize(
        code: u16,
        body: Option<&Value>,
        raw: &str,
        error_reference: Option<String>,
    ) -> Self {
        let extracted = body
            .and_then(extract_error_message)
            .or_else(|| plain_text_message(raw));

        let server_message = extracted.is_some();
        let message = extracted.unwrap_or_else(|| format!("Request failed with status {code}"));

        Self {
            code,
            message,
            server_message,
            body: body.cloned(),
            error_reference,
        }
    }

    /// Returns the field errors carried by a validation response.
    ///
    /// Handles `{"field": ["msg", ...]}`, `{"field": "msg"}` and
    /// `{"errors": {...}}` shapes. Message keys such as `detail` are skipped.
    #[must_use]
    pub fn field_errors(&self) -> std::collections::HashMap<String, Vec<String>> {
        let mut errors = std::collections::HashMap::new();

        let Some(Value::Object(map)) = self.body.as_ref() else {
            return errors;
        };

        let source = match map.get("errors") {
            Some(Value::Object(inner)) => inner,
            _ => map,
        };

        for (field, value) in source {
            if field == "detail" || field == "message" || field == "error" {
                continue;
            }
            let messages: Vec<String> = match value {
                Value::String(s) => vec![s.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(ToString::to_string))
                    .collect(),
                _ => continue,
            };
            if !messages.is_empty() {
                errors.insert(field.clone(), messages);
            }
        }

        errors
    }
}

/// Extracts a human-readable message from an error body.
///
/// Precedence: `detail`, `message`, `error`, `non_field_errors[0]`, then the
/// first field whose value is a non-empty array of strings.
#[must_use]
pub fn extract_error_message(body: &Value) -> Option<String> {
    match body {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => items.iter().find_map(extract_error_message),
        Value::Object(map) => {
            for key in MESSAGE_KEYS {
                if let Some(found) = map.get(key).and_then(extract_error_message) {
                    return Some(found);
                }
            }
            map.values().find_map(|value| match value {
                Value::Array(items) => items
                    .iter()
                    .find_map(|item| item.as_str().map(str::trim))
                    .filter(|s| !s.is_empty())
                    .map(ToString::to_string),
                _ => None,
            })
        }
        _ => None,
    }
}

/// Accepts a raw body as a message only when it looks like one line of text.
fn plain_text_message(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let looks_like_markup = trimmed.starts_with('<') || trimmed.starts_with('{');
    if trimmed.is_empty() || looks_like_markup || trimmed.len() > 200 || trimmed.contains('\n') {
        return None;
    }
    Some(trimmed.to_string())
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent, for example when a PUT
/// or PATCH request is built without a body.
///
/// # Example
///
/// ```rust
/// use nepdora_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "patch".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use patch without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A multipart body was attached to a request that cannot carry one.
    #[error("Cannot send a multipart body with {method}.")]
    UnexpectedBody {
        /// The HTTP method.
        method: String,
    },
}

/// Error returned when a successful response body cannot be decoded.
#[derive(Debug, Error)]
pub enum ResponseDecodeError {
    /// The response carried no body.
    #[error("Expected a JSON body but the response (status {code}) was empty.")]
    EmptyBody {
        /// The HTTP status code.
        code: u16,
    },

    /// The body was present but not JSON.
    #[error("Expected a JSON body but received content type '{content_type}'.")]
    NotJson {
        /// The reported content type.
        content_type: String,
    },

    /// The JSON did not match the expected shape.
    #[error("Malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use nepdora_api::clients::HttpError;
///
/// match client.request(request).await {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error. Please check your connection and try again. ({0})")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
