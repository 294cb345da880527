//! Credential providers and bearer tokens.
//!
//! Request construction needs read access to the current session's
//! credentials. Rather than reading from ambient storage, every client is
//! given a [`CredentialProvider`] when it is constructed. The provider is
//! consulted on every request and its answers are never stored.

use crate::error::ConfigError;
use std::fmt;
use std::sync::Arc;

/// A validated bearer token.
///
/// # Security
///
/// The `Debug` implementation masks the value so tokens never reach logs.
///
/// # Example
///
/// ```rust
/// use nepdora_api::AuthToken;
///
/// let token = AuthToken::new("eyJhbGciOi").unwrap();
/// assert_eq!(token.as_ref(), "eyJhbGciOi");
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty after trimming.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token.to_string()))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// Which credentials an endpoint is called with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthPolicy {
    /// No `Authorization` header. Used by public-facing resources.
    Anonymous,
    /// The dashboard administrator's token.
    #[default]
    Admin,
    /// The storefront customer's token.
    Customer,
}

/// Read-only access to the current session's credentials.
///
/// Implementations are called once per request. Returning `None` is not an
/// error: the request is sent without an `Authorization` header and the
/// backend decides whether that is acceptable.
///
/// # Example
///
/// ```rust
/// use nepdora_api::{AuthToken, CredentialProvider};
/// use std::sync::RwLock;
///
/// #[derive(Debug, Default)]
/// struct SessionStore {
///     token: RwLock<Option<String>>,
/// }
///
/// impl CredentialProvider for SessionStore {
///     fn admin_token(&self) -> Option<AuthToken> {
///         let guard = self.token.read().ok()?;
///         guard.as_deref().and_then(|t| AuthToken::new(t).ok())
///     }
/// }
/// ```
pub trait CredentialProvider: Send + Sync + fmt::Debug {
    /// Returns the administrator token, if one is available.
    fn admin_token(&self) -> Option<AuthToken>;

    /// Returns the customer token, if one is available.
    fn customer_token(&self) -> Option<AuthToken> {
        None
    }

    /// Returns the token to use for `policy`.
    fn token_for(&self, policy: AuthPolicy) -> Option<AuthToken> {
        match policy {
            AuthPolicy::Anonymous => None,
            AuthPolicy::Admin => self.admin_token(),
            AuthPolicy::Customer => self.customer_token(),
        }
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Arc<T> {
    fn admin_token(&self) -> Option<AuthToken> {
        (**self).admin_token()
    }

    fn customer_token(&self) -> Option<AuthToken> {
        (**self).customer_token()
    }
}

/// A provider that never supplies a token.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn admin_token(&self) -> Option<AuthToken> {
        None
    }
}

/// A provider holding fixed tokens.
///
/// # Example
///
/// ```rust
/// use nepdora_api::{AuthToken, CredentialProvider, StaticCredentials};
///
/// let credentials = StaticCredentials::admin(AuthToken::new("admin-token").unwrap());
/// assert!(credentials.admin_token().is_some());
/// assert!(credentials.customer_token().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials {
    admin: Option<AuthToken>,
    customer: Option<AuthToken>,
}

impl StaticCredentials {
    /// Creates a provider with only an administrator token.
    #[must_use]
    pub const fn admin(token: AuthToken) -> Self {
        Self {
            admin: Some(token),
            customer: None,
        }
    }

    /// Adds a customer token.
    #[must_use]
    pub fn with_customer(mut self, token: AuthToken) -> Self {
        self.customer = Some(token);
        self
    }
}

impl CredentialProvider for StaticCredentials {
    fn admin_token(&self) -> Option<AuthToken> {
        self.admin.clone()
    }

    fn customer_token(&self) -> Option<AuthToken> {
        self.customer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_rejects_blank_values() {
        assert!(matches!(AuthToken::new(""), Err(ConfigError::EmptyAuthToken)));
        assert!(matches!(AuthToken::new("   "), Err(ConfigError::EmptyAuthToken)));
    }

    #[test]
    fn test_auth_token_trims_and_formats_bearer() {
        let token = AuthToken::new(" abc123 ").unwrap();
        assert_eq!(token.as_ref(), "abc123");
        assert_eq!(token.bearer(), "Bearer abc123");
    }

    #[test]
    fn test_auth_token_debug_is_masked() {
        let token = AuthToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_token_for_respects_policy() {
        let credentials = StaticCredentials::admin(AuthToken::new("admin").unwrap())
            .with_customer(AuthToken::new("customer").unwrap());

        assert!(credentials.token_for(AuthPolicy::Anonymous).is_none());
        assert_eq!(
            credentials.token_for(AuthPolicy::Admin).unwrap().as_ref(),
            "admin"
        );
        assert_eq!(
            credentials.token_for(AuthPolicy::Customer).unwrap().as_ref(),
            "customer"
        );
    }

    #[test]
    fn test_no_credentials_never_supplies_a_token() {
        assert!(NoCredentials.token_for(AuthPolicy::Admin).is_none());
        assert!(NoCredentials.token_for(AuthPolicy::Customer).is_none());
    }

    #[test]
    fn test_arc_provider_delegates() {
        let credentials: Arc<dyn CredentialProvider> =
            Arc::new(StaticCredentials::admin(AuthToken::new("admin").unwrap()));
        assert_eq!(credentials.admin_token().unwrap().as_ref(), "admin");
    }

    #[test]
    fn test_default_policy_is_admin() {
        assert_eq!(AuthPolicy::default(), AuthPolicy::Admin);
    }
}
