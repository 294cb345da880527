//! Authentication types for the Nepdora API client.
//!
//! The client only consumes credentials; acquiring a token is the caller's
//! job. A [`CredentialProvider`] is injected when a client is constructed
//! and each endpoint declares an [`AuthPolicy`] saying which token, if any,
//! it is called with.
//!
//! # Overview
//!
//! - [`AuthToken`]: A validated bearer token with masked debug output
//! - [`CredentialProvider`]: Read access to the current session's tokens
//! - [`StaticCredentials`] and [`NoCredentials`]: Ready-made providers
//! - [`AuthPolicy`]: Anonymous, admin or customer access
//!
//! # Example
//!
//! ```rust
//! use nepdora_api::{AuthPolicy, AuthToken, CredentialProvider, StaticCredentials};
//!
//! let credentials = StaticCredentials::admin(AuthToken::new("token").unwrap());
//! assert!(credentials.token_for(AuthPolicy::Admin).is_some());
//! assert!(credentials.token_for(AuthPolicy::Anonymous).is_none());
//! ```

mod credentials;

pub use credentials::{AuthPolicy, AuthToken, CredentialProvider, NoCredentials, StaticCredentials};
