//! REST client for the tenant admin API.
//!
//! This module provides the [`RestClient`] type for making requests under
//! the `/api/` prefix with automatic path normalization.

use std::sync::Arc;

use crate::auth::{AuthPolicy, CredentialProvider};
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RequestBody};
use crate::config::{NepdoraConfig, TenantName};

/// Prefix every resource path lives under.
const API_PREFIX: &str = "api";

/// REST client for the tenant admin API.
///
/// Provides `get`, `post`, `put`, `patch` and `delete` methods with
/// automatic path normalization. Each method takes the [`AuthPolicy`] the
/// endpoint is called with.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use nepdora_api::{AuthPolicy, AuthToken, NepdoraConfig, RestClient, StaticCredentials, TenantName};
///
/// let config = NepdoraConfig::builder()
///     .tenant(TenantName::new("bibek").unwrap())
///     .build()?;
/// let credentials = StaticCredentials::admin(AuthToken::new("token")?);
/// let client = RestClient::new(config, Arc::new(credentials))?;
///
/// // GET https://bibek.nepdora.baliyoventures.com/api/faq/
/// let response = client.get("faq", Vec::new(), AuthPolicy::Admin).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(
        config: NepdoraConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config, credentials)?;
        Ok(Self { http_client })
    }

    /// Wraps an existing HTTP client.
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns a client for another tenant.
    ///
    /// The new client shares the connection pool and credential provider.
    #[must_use]
    pub fn for_tenant(&self, tenant: TenantName) -> Self {
        let config = self.http_client.config().with_tenant(tenant);
        Self {
            http_client: self.http_client.with_config(config),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &NepdoraConfig {
        self.http_client.config()
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        auth: AuthPolicy,
    ) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Get, path, None, query, auth).await
    }

    /// Sends a POST request. The body is optional.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        auth: AuthPolicy,
    ) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Post, path, body, Vec::new(), auth)
            .await
    }

    /// Sends a PUT request (full replacement).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: RequestBody,
        auth: AuthPolicy,
    ) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Put, path, Some(body), Vec::new(), auth)
            .await
    }

    /// Sends a PATCH request (partial update).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch(
        &self,
        path: &str,
        body: RequestBody,
        auth: AuthPolicy,
    ) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Patch, path, Some(body), Vec::new(), auth)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str, auth: AuthPolicy) -> Result<HttpResponse, RestError> {
        self.send(HttpMethod::Delete, path, None, Vec::new(), auth)
            .await
    }

    /// Sends a request with any method.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<RequestBody>,
        query: Vec<(String, String)>,
        auth: AuthPolicy,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let request = HttpRequest::builder(method, normalized_path)
            .maybe_body(body)
            .query(query)
            .auth(auth)
            .build()
            .map_err(|e| RestError::Http(e.into()))?;

        Ok(self.http_client.request(request).await?)
    }
}

/// Normalizes a resource path to `api/{path}/`.
///
/// - Leading and trailing slashes are trimmed, then one trailing slash is added
/// - An existing `api/` prefix is kept rather than doubled
/// - Empty paths and paths carrying `?` or `#` are rejected
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim().trim_matches('/');
    let trimmed = trimmed
        .strip_prefix("api/")
        .unwrap_or(trimmed)
        .trim_start_matches('/');

    if trimmed.is_empty() || trimmed == API_PREFIX || trimmed.contains(['?', '#']) {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{API_PREFIX}/{trimmed}/"))
}
