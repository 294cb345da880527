//! HTTP client types for tenant backend communication.
//!
//! This module provides the HTTP layer: request construction, header sets,
//! response decoding, error normalization and a path-normalizing REST client.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response, with its body parsed only when it is JSON
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`RequestBody`]: JSON or multipart request bodies
//! - [`HeaderSet`]: Standard and authenticated header sets
//! - [`HttpResponseError`]: The normalized error for non-2xx responses
//! - [`rest::RestClient`]: Higher-level REST client
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nepdora_api::clients::{HttpClient, HttpRequest, HttpMethod};
//! use nepdora_api::{AuthPolicy, NepdoraConfig, NoCredentials, TenantName};
//!
//! let config = NepdoraConfig::builder()
//!     .tenant(TenantName::new("bibek").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(config, Arc::new(NoCredentials))?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "api/popup/")
//!     .auth(AuthPolicy::Anonymous)
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod headers;
mod http_client;
mod http_request;
mod http_response;
mod multipart;
pub mod rest;

pub use errors::{
    extract_error_message, HttpError, HttpResponseError, InvalidHttpRequestError,
    ResponseDecodeError,
};
pub use headers::{names as header_names, HeaderSet};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
pub use multipart::{FileAttachment, FormPayload, FormValue};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
