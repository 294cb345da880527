//! Integration tests for the REST client against a mock tenant backend.
//!
//! These tests cover path normalization, credential headers, request body
//! encoding and the normalization of failed responses.

use std::sync::Arc;

use nepdora_api::clients::FormPayload;
use nepdora_api::{
    AuthPolicy, AuthToken, BaseUrlOverride, CredentialProvider, FileAttachment, HttpError,
    NepdoraConfig, NoCredentials, RequestBody, RestClient, RestError, StaticCredentials, TenantName,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a configuration that points at the mock server.
fn config_for(server: &MockServer) -> NepdoraConfig {
    NepdoraConfig::builder()
        .tenant(TenantName::new("bibek").unwrap())
        .base_url_override(BaseUrlOverride::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn admin_client(server: &MockServer) -> RestClient {
    let credentials = StaticCredentials::admin(AuthToken::new("admin-token").unwrap())
        .with_customer(AuthToken::new("customer-token").unwrap());
    RestClient::new(config_for(server), Arc::new(credentials)).unwrap()
}

fn anonymous_client(server: &MockServer) -> RestClient {
    RestClient::new(config_for(server), Arc::new(NoCredentials)).unwrap()
}

// ============================================================================
// Path Normalization
// ============================================================================

#[tokio::test]
async fn test_paths_are_prefixed_with_api_and_get_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/faq/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(3)
        .mount(&server)
        .await;

    let client = admin_client(&server);
    for raw in ["faq", "/faq/", "/api/faq"] {
        let response = client.get(raw, Vec::new(), AuthPolicy::Admin).await.unwrap();
        assert_eq!(response.code, 200);
    }
}

#[tokio::test]
async fn test_query_pairs_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payment-gateway/"))
        .and(query_param("payment_type", "khalti"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = admin_client(&server);
    client
        .get(
            "payment-gateway",
            vec![("payment_type".to_string(), "khalti".to_string())],
            AuthPolicy::Admin,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_path_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = admin_client(&server);

    let result = client.get("faq?page=2", Vec::new(), AuthPolicy::Admin).await;
    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Credentials
// ============================================================================

#[tokio::test]
async fn test_admin_policy_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard-stats/"))
        .and(header("Authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    admin_client(&server)
        .get("dashboard-stats", Vec::new(), AuthPolicy::Admin)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_customer_policy_sends_customer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/order/"))
        .and(header("Authorization", "Bearer customer-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    admin_client(&server)
        .post("order", Some(json!({}).into()), AuthPolicy::Customer)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_anonymous_policy_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/videos/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    admin_client(&server)
        .get("videos", Vec::new(), AuthPolicy::Anonymous)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_missing_token_omits_header_instead_of_failing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/faq/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    anonymous_client(&server)
        .get("faq", Vec::new(), AuthPolicy::Admin)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

// ============================================================================
// Request Bodies
// ============================================================================

#[tokio::test]
async fn test_json_body_is_sent_with_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/faq/3/"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"answer": "Yes"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    admin_client(&server)
        .patch("faq/3", json!({"answer": "Yes"}).into(), AuthPolicy::Admin)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_multipart_body_carries_fields_and_files() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/our-client/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;

    let mut form = FormPayload::new();
    form.text("name", "Acme");
    form.file(
        "logo",
        FileAttachment::new("acme.png", b"PNGDATA".to_vec()).with_mime("image/png"),
    );

    admin_client(&server)
        .post("our-client", Some(RequestBody::Multipart(form)), AuthPolicy::Admin)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("Acme"));
    assert!(body.contains("name=\"logo\"; filename=\"acme.png\""));
    assert!(body.contains("PNGDATA"));
}

// ============================================================================
// Error Normalization
// ============================================================================

#[tokio::test]
async fn test_not_found_detail_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/service/missing/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let error = admin_client(&server)
        .get("service/missing", Vec::new(), AuthPolicy::Admin)
        .await
        .unwrap_err();

    match error {
        RestError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.message, "Not found.");
            assert!(e.server_message);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_field_errors_are_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/testimonial/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"name": ["This field is required."]}))
                .insert_header("X-Request-Id", "req-42"),
        )
        .mount(&server)
        .await;

    let error = admin_client(&server)
        .post("testimonial", Some(json!({}).into()), AuthPolicy::Admin)
        .await
        .unwrap_err();

    let RestError::Http(HttpError::Response(e)) = error else {
        panic!("expected a response error");
    };
    assert_eq!(e.message, "This field is required.");
    assert_eq!(e.field_errors()["name"], vec!["This field is required."]);
    assert_eq!(e.error_reference.as_deref(), Some("req-42"));
}

#[tokio::test]
async fn test_html_error_page_gets_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/order/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html><body>Bad Gateway</body></html>"))
        .mount(&server)
        .await;

    let error = admin_client(&server)
        .get("order", Vec::new(), AuthPolicy::Admin)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Request failed with status 502");
    assert_eq!(error.status(), Some(502));
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    let config = NepdoraConfig::builder()
        .tenant(TenantName::new("bibek").unwrap())
        .base_url_override(BaseUrlOverride::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(config, Arc::new(NoCredentials)).unwrap();

    let error = client
        .get("faq", Vec::new(), AuthPolicy::Anonymous)
        .await
        .unwrap_err();

    assert!(matches!(error, RestError::Http(HttpError::Network(_))));
    assert!(error
        .to_string()
        .starts_with("Network error. Please check your connection and try again."));
}

// ============================================================================
// Tenant Switching
// ============================================================================

#[test]
fn test_for_tenant_targets_new_origin() {
    let config = NepdoraConfig::builder()
        .tenant(TenantName::new("bibek").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(
        config,
        Arc::new(StaticCredentials::admin(AuthToken::new("t").unwrap())),
    )
    .unwrap();

    let other = client.for_tenant(TenantName::new("batoma").unwrap());

    assert_eq!(
        client.config().api_base_url(),
        "https://bibek.nepdora.baliyoventures.com"
    );
    assert_eq!(
        other.config().api_base_url(),
        "https://batoma.nepdora.baliyoventures.com"
    );
    assert!(other.http_client().credentials().admin_token().is_some());
}
