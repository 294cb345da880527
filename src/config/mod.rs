//! Configuration types for the Nepdora API client.
//!
//! This module provides the configuration used to resolve which tenant
//! backend a client talks to.
//!
//! # Overview
//!
//! - [`NepdoraConfig`]: The main configuration struct
//! - [`NepdoraConfigBuilder`]: A builder for constructing [`NepdoraConfig`] instances
//! - [`TenantName`]: A validated tenant identifier
//! - [`ApiDomain`]: The shared domain tenants are prefixed onto
//! - [`BaseUrlOverride`]: An explicit origin for proxies and tests
//!
//! # Example
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

mod newtypes;

pub use newtypes::{ApiDomain, BaseUrlOverride, TenantName};

use crate::error::ConfigError;

/// Configuration for the Nepdora API client.
///
/// # Tenant Resolution
///
/// The API origin is derived from the tenant name and domain each time
/// [`api_base_url`](Self::api_base_url) is called. Nothing stores the derived
/// URL, so a configuration produced by [`with_tenant`](Self::with_tenant)
/// immediately targets the new tenant.
///
/// # Thread Safety
///
/// `NepdoraConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct NepdoraConfig {
    tenant: TenantName,
    domain: ApiDomain,
    base_url_override: Option<BaseUrlOverride>,
    site_name: String,
    user_agent_prefix: Option<String>,
}

impl NepdoraConfig {
    /// Default display name of the site.
    pub const DEFAULT_SITE_NAME: &'static str = "Nepdora";

    /// Creates a new builder for constructing a `NepdoraConfig`.
    #[must_use]
    pub fn builder() -> NepdoraConfigBuilder {
        NepdoraConfigBuilder::new()
    }

    /// Returns the tenant name.
    #[must_use]
    pub const fn tenant(&self) -> &TenantName {
        &self.tenant
    }

    /// Returns the API domain.
    #[must_use]
    pub const fn domain(&self) -> &ApiDomain {
        &self.domain
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn base_url_override(&self) -> Option<&BaseUrlOverride> {
        self.base_url_override.as_ref()
    }

    /// Returns the site display name.
    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Derives the API origin for this configuration.
    ///
    /// Returns the override when one is configured, otherwise
    /// `https://{tenant}.{domain}`. The result never ends with a slash.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nepdora_api::{ApiDomain, NepdoraConfig, TenantName};
    ///
    /// let config = NepdoraConfig::builder()
    ///     .tenant(TenantName::new("batoma").unwrap())
    ///     .domain(ApiDomain::new("staging.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.api_base_url(), "https://batoma.staging.example.com");
    /// ```
    #[must_use]
    pub fn api_base_url(&self) -> String {
        self.base_url_override.as_ref().map_or_else(
            || format!("https://{}.{}", self.tenant.as_ref(), self.domain.as_ref()),
            |base| base.as_ref().to_string(),
        )
    }

    /// Returns a copy of this configuration targeting another tenant.
    #[must_use]
    pub fn with_tenant(&self, tenant: TenantName) -> Self {
        Self {
            tenant,
            ..self.clone()
        }
    }
}

// Verify NepdoraConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NepdoraConfig>();
};

/// Builder for constructing [`NepdoraConfig`] instances.
///
/// The only required field is `tenant`.
///
/// # Defaults
///
/// - `domain`: `nepdora.baliyoventures.com`
/// - `base_url_override`: `None`
/// - `site_name`: `Nepdora`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use nepdora_api::{BaseUrlOverride, NepdoraConfig, TenantName};
///
/// let config = NepdoraConfig::builder()
///     .tenant(TenantName::new("bibek").unwrap())
///     .base_url_override(BaseUrlOverride::new("http://localhost:8000").unwrap())
///     .user_agent_prefix("Dashboard/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_base_url(), "http://localhost:8000");
/// ```
#[derive(Debug, Default)]
pub struct NepdoraConfigBuilder {
    tenant: Option<TenantName>,
    domain: Option<ApiDomain>,
    base_url_override: Option<BaseUrlOverride>,
    site_name: Option<String>,
    user_agent_prefix: Option<String>,
}

impl NepdoraConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tenant name (required).
    #[must_use]
    pub fn tenant(mut self, tenant: TenantName) -> Self {
        self.tenant = Some(tenant);
        self
    }

    /// Sets the API domain.
    #[must_use]
    pub fn domain(mut self, domain: ApiDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets an explicit origin that replaces the tenant-derived one.
    #[must_use]
    pub fn base_url_override(mut self, base: BaseUrlOverride) -> Self {
        self.base_url_override = Some(base);
        self
    }

    /// Sets the site display name.
    #[must_use]
    pub fn site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = Some(name.into());
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `tenant` was not set.
    pub fn build(self) -> Result<NepdoraConfig, ConfigError> {
        let tenant = self
            .tenant
            .ok_or(ConfigError::MissingRequiredField { field: "tenant" })?;

        Ok(NepdoraConfig {
            tenant,
            domain: self.domain.unwrap_or_default(),
            base_url_override: self.base_url_override,
            site_name: self
                .site_name
                .unwrap_or_else(|| NepdoraConfig::DEFAULT_SITE_NAME.to_string()),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
