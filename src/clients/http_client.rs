//! HTTP client for tenant backend communication.
//!
//! This module provides the [`HttpClient`] type for sending requests to the
//! tenant-scoped origin. It resolves the tenant URL, builds headers from the
//! injected credential provider, and routes every failed response through
//! the error normalizer.

use std::fmt;
use std::sync::Arc;

use crate::auth::CredentialProvider;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::headers::{names, HeaderSet};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::NepdoraConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to a tenant backend.
///
/// The client handles:
/// - Base URI resolution from the configured tenant, on every request
/// - Standard and authenticated header sets
/// - JSON and multipart bodies
/// - Error normalization for non-2xx responses
///
/// No retries or timeouts are applied. Callers that need them layer them
/// on top.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use nepdora_api::clients::{HttpClient, HttpRequest, HttpMethod};
/// use nepdora_api::{NepdoraConfig, NoCredentials, TenantName};
///
/// let config = NepdoraConfig::builder()
///     .tenant(TenantName::new("bibek").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(config, Arc::new(NoCredentials))?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "api/videos/")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Tenant configuration, consulted on every request.
    config: NepdoraConfig,
    /// Source of bearer tokens.
    credentials: Arc<dyn CredentialProvider>,
    /// Value of the User-Agent header.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(
        config: NepdoraConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        let user_agent = Self::build_user_agent(&config);

        tracing::debug!(
            tenant = %config.tenant(),
            base_url = %config.api_base_url(),
            "Created HTTP client"
        );

        Ok(Self {
            client,
            config,
            credentials,
            user_agent,
        })
    }

    fn build_user_agent(config: &NepdoraConfig) -> String {
        let prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        format!("{prefix}Nepdora API Library v{SDK_VERSION} | Rust {rust_version}")
    }

    /// Returns a client for a different configuration that shares this
    /// client's connection pool and credentials.
    #[must_use]
    pub fn with_config(&self, config: NepdoraConfig) -> Self {
        let user_agent = Self::build_user_agent(&config);
        Self {
            client: self.client.clone(),
            config,
            credentials: Arc::clone(&self.credentials),
            user_agent,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &NepdoraConfig {
        &self.config
    }

    /// Returns the current base URI, derived from the configuration.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.config.api_base_url()
    }

    /// Returns the User-Agent header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the credential provider.
    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialProvider {
        self.credentials.as_ref()
    }

    /// Builds the headers for a request.
    ///
    /// Multipart requests drop the JSON content type so the transport can
    /// supply the boundary.
    #[must_use]
    pub fn headers_for(&self, request: &HttpRequest) -> HeaderSet {
        let mut headers =
            HeaderSet::authenticated(&self.user_agent, self.credentials.as_ref(), request.auth);

        if matches!(request.body, Some(RequestBody::Multipart(_))) {
            headers.remove(names::CONTENT_TYPE);
        }

        if let Some(extra) = &request.extra_headers {
            headers.extend(extra);
        }

        headers
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`, already normalized)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!(
            "{}/{}",
            self.config.api_base_url(),
            request.path.trim_start_matches('/')
        );
        let headers = self.headers_for(&request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in headers.iter() {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        match &request.body {
            Some(RequestBody::Json(value)) => {
                req_builder = req_builder.body(value.to_string());
            }
            Some(RequestBody::Multipart(form)) => {
                req_builder = req_builder.multipart(form.to_reqwest_form()?);
            }
            None => {}
        }

        tracing::debug!(
            method = %request.http_method,
            url = %url,
            auth = ?request.auth,
            "Sending request"
        );

        let res = req_builder.send().await.map_err(|e| {
            tracing::error!(method = %request.http_method, url = %url, error = %e, "Network error");
            HttpError::Network(e)
        })?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let raw = res.bytes().await?.to_vec();
        let response = HttpResponse::new(code, res_headers, raw);

        if response.is_ok() {
            return Ok(response);
        }

        let error = HttpResponseError::normalize(
            code,
            response.body.as_ref(),
            &response.text(),
            response.request_id().map(String::from),
        );

        tracing::warn!(
            method = %request.http_method,
            url = %url,
            status = code,
            request_id = ?error.error_reference,
            message = %error.message,
            "Request failed"
        );

        Err(HttpError::Response(error))
    }

    /// Parses response headers into a map keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> std::collections::HashMap<String, Vec<String>> {
        let mut result: std::collections::HashMap<String, Vec<String>> =
            std::collections::HashMap::new();

        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }

        result
    }
}
