//! Error types for the Nepdora API client.
//!
//! This module contains error types used for configuration and validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use nepdora_api::{ConfigError, TenantName};
//!
//! let result = TenantName::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidTenantName { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Tenant name is not a valid DNS label.
    #[error("Invalid tenant name '{tenant}'. Expected 1-63 lowercase letters, digits or '-' (e.g., 'bibek').")]
    InvalidTenantName {
        /// The invalid tenant name that was provided.
        tenant: String,
    },

    /// API domain is invalid.
    #[error("Invalid API domain '{domain}'. Expected a bare host name such as 'nepdora.baliyoventures.com'.")]
    InvalidApiDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// Base URL override is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'http://127.0.0.1:8080').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Use NoCredentials for anonymous access instead.")]
    EmptyAuthToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tenant_name_error_message() {
        let error = ConfigError::InvalidTenantName {
            tenant: "Bad Tenant".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Bad Tenant"));
        assert!(message.contains("lowercase"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "tenant" };
        assert!(error.to_string().contains("'tenant'"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("http"));
    }

    #[test]
    fn test_config_error_implements_std_error() {
        let error: &dyn std::error::Error = &ConfigError::EmptyAuthToken;
        assert!(error.to_string().contains("empty"));
    }
}
