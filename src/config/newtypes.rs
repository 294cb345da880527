//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated tenant name.
///
/// The tenant name selects which backend origin a request targets and is
/// interpolated as the left-most label of the API host, so it must be a
/// valid DNS label.
///
/// # Example
///
/// ```rust
/// use nepdora_api::TenantName;
///
/// let tenant = TenantName::new("  Bibek ").unwrap();
/// assert_eq!(tenant.as_ref(), "bibek");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TenantName(String);

impl TenantName {
    const MAX_LEN: usize = 63;

    /// Creates a new validated tenant name.
    ///
    /// Input is trimmed and lower-cased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTenantName`] if the name is not a valid DNS label.
    pub fn new(tenant: impl Into<String>) -> Result<Self, ConfigError> {
        let tenant = tenant.into().trim().to_lowercase();

        if !Self::is_valid_label(&tenant) {
            return Err(ConfigError::InvalidTenantName { tenant });
        }

        Ok(Self(tenant))
    }

    fn is_valid_label(label: &str) -> bool {
        if label.is_empty() || label.len() > Self::MAX_LEN {
            return false;
        }

        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }

        label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for TenantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TenantName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TenantName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// The shared API domain that tenant names are prefixed onto.
///
/// # Example
///
/// ```rust
/// use nepdora_api::ApiDomain;
///
/// assert_eq!(ApiDomain::default().as_ref(), "nepdora.baliyoventures.com");
///
/// let domain = ApiDomain::new("staging.example.com").unwrap();
/// assert_eq!(domain.as_ref(), "staging.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiDomain(String);

impl ApiDomain {
    /// The production domain.
    pub const DEFAULT: &'static str = "nepdora.baliyoventures.com";

    /// Creates a new validated API domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiDomain`] if the value is empty, has
    /// no dot, or carries a scheme, path, port or whitespace.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let valid = !domain.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');

        if !valid {
            return Err(ConfigError::InvalidApiDomain { domain });
        }

        Ok(Self(domain))
    }
}

impl Default for ApiDomain {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for ApiDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An explicit origin that replaces the tenant-derived one.
///
/// Useful for local development proxies and for pointing the client at a
/// mock server in tests. The stored value never ends with a slash.
///
/// # Example
///
/// ```rust
/// use nepdora_api::BaseUrlOverride;
///
/// let base = BaseUrlOverride::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(base.as_ref(), "http://127.0.0.1:8080");
///
/// assert!(BaseUrlOverride::new("ftp://example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrlOverride(String);

impl BaseUrlOverride {
    /// Creates a new validated base URL override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is not an absolute
    /// `http` or `https` URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();

        let parsed = url::Url::parse(trimmed)
            .map_err(|_| ConfigError::InvalidBaseUrl { url: raw.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl { url: raw });
        }

        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for BaseUrlOverride {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
