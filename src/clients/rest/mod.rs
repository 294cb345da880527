//! REST client for the tenant admin API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`RestClient`]: The REST client with `get()`, `post()`, `put()`, `patch()`, `delete()` methods
//! - [`RestError`]: Error type for REST operations
//!
//! # Path Normalization
//!
//! Resource paths follow the backend's `/api/{resource}/` convention:
//!
//! - Leading slashes and an existing `api/` prefix are stripped: `/api/faq` -> `faq`
//! - The path is re-prefixed and given a trailing slash: `faq` -> `api/faq/`
//! - Query strings belong in the `query` argument, never in the path

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
