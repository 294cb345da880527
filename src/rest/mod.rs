//! REST resource infrastructure for the tenant admin API.
//!
//! This module provides the foundation every resource is built on:
//!
//! - **[`RestResource`] trait**: CRUD operations driven by a path table
//! - **[`Page<T>`]**: Normalized pagination envelopes
//! - **[`serialize_to_query`]**: Filter structs to query pairs
//! - **[`encode_payload`]**: JSON or multipart request bodies
//! - **[`Ack`]**: Acknowledgements for delete and submit calls
//! - **[`TrackedResource<T>`]**: Dirty tracking for partial updates
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! Individual resources live in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nepdora_api::{AuthToken, NepdoraConfig, RestClient, StaticCredentials, TenantName};
//! use nepdora_api::rest::RestResource;
//! use nepdora_api::rest::resources::{Testimonial, TestimonialListParams};
//!
//! let config = NepdoraConfig::builder()
//!     .tenant(TenantName::new("bibek")?)
//!     .build()?;
//! let client = RestClient::new(config, Arc::new(StaticCredentials::admin(AuthToken::new("t")?)))?;
//!
//! let page = Testimonial::all(&client, Some(TestimonialListParams {
//!     page: Some(2),
//!     ..Default::default()
//! })).await?;
//!
//! for testimonial in page.iter() {
//!     println!("{}", testimonial.name);
//! }
//! if page.has_next {
//!     // fetch page 3
//! }
//! ```

mod ack;
mod errors;
mod page;
mod path;
mod payload;
mod query;
mod resource;
mod tracking;

pub mod resources;

pub use ack::{Ack, DeleteAck};
pub use errors::{fallback_message, ResourceError};
pub use page::{Page, DEFAULT_PAGE_SIZE};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use payload::{encode_payload, FieldEncoding, FormEncoder, PayloadError, ResourcePayload};
pub use query::{ordering, serialize_to_query, SortOrder};
pub use resource::{
    page_from_response, path_ids, send_custom, send_custom_as, send_operation, PathIds,
    RestResource,
};
pub use tracking::TrackedResource;
