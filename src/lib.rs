//! # Nepdora API Rust client
//!
//! An async client for the Nepdora website builder's tenant REST API: the
//! backend behind each site's admin dashboard and public storefront.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`NepdoraConfig`] and [`NepdoraConfigBuilder`]
//! - Tenant-scoped base URLs (`https://{tenant}.nepdora.baliyoventures.com`),
//!   derived on every request
//! - Injected credentials through the [`CredentialProvider`] trait, with a
//!   per-resource [`AuthPolicy`]
//! - One normalized error ([`HttpResponseError`]) for every non-2xx response
//! - JSON or multipart request bodies, chosen per call
//! - Typed resources with pagination normalized into [`rest::Page`]
//!
//! ## Quick Start
//!
//! ```rust
//! use nepdora_api::{NepdoraConfig, TenantName};
//!
//! let config = NepdoraConfig::builder()
//!     .tenant(TenantName::new("bibek").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_url(), "https://bibek.nepdora.baliyoventures.com");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nepdora_api::{AuthToken, NepdoraConfig, RestClient, StaticCredentials, TenantName};
//! use nepdora_api::rest::RestResource;
//! use nepdora_api::rest::resources::{Appointment, AppointmentStatus, AppointmentUpdate};
//!
//! let config = NepdoraConfig::builder()
//!     .tenant(TenantName::new("bibek")?)
//!     .build()?;
//! let credentials = StaticCredentials::admin(AuthToken::new(token)?);
//! let client = RestClient::new(config, Arc::new(credentials))?;
//!
//! let page = Appointment::all(&client, None).await?;
//! println!("{} appointments over {} pages", page.count, page.total_pages);
//!
//! Appointment::update(&client, 5, &AppointmentUpdate {
//!     status: Some(AppointmentStatus::Confirmed),
//!     ..Default::default()
//! }).await?;
//! ```
//!
//! ## Switching Tenants
//!
//! ```rust,ignore
//! let other = client.for_tenant(TenantName::new("another-site")?);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and credentials are passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **One failure path**: every non-2xx response goes through the same
//!   normalizer; resources never inspect status codes themselves

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthPolicy, AuthToken, CredentialProvider, NoCredentials, StaticCredentials};
pub use config::{ApiDomain, BaseUrlOverride, NepdoraConfig, NepdoraConfigBuilder, TenantName};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    FileAttachment, FormPayload, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, RequestBody,
    ResponseDecodeError, RestClient, RestError,
};
