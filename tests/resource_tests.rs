//! End-to-end tests for tenant resources against a mock backend.
//!
//! Each test mounts the endpoint a resource operation should reach and
//! checks the verb, path, query, body and credentials it is called with.

use std::sync::Arc;

use nepdora_api::rest::resources::{
    Appointment, AppointmentStatus, AppointmentUpdate, BasicListParams, Booking, BookingUpdate,
    BulkUpload, CollectionData, CollectionDataFilters, DeliveryCharge, Faq, Order, OrderInput,
    OrderItemInput, OrderListParams, OrderStatus, OurClient, OurClientInput, PaymentGateway,
    PaymentType, Popup, PopupForm, Portfolio, PortfolioInput, PromoCode, Service, Testimonial,
    Video, VideoInput,
};
use nepdora_api::rest::{ResourceError, RestResource, TrackedResource};
use nepdora_api::{
    AuthPolicy, AuthToken, BaseUrlOverride, FileAttachment, HttpError, NepdoraConfig,
    RestClient, StaticCredentials, TenantName,
};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RestClient {
    let config = NepdoraConfig::builder()
        .tenant(TenantName::new("bibek").unwrap())
        .base_url_override(BaseUrlOverride::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let credentials = StaticCredentials::admin(AuthToken::new("admin-token").unwrap())
        .with_customer(AuthToken::new("customer-token").unwrap());
    RestClient::new(config, Arc::new(credentials)).unwrap()
}

fn testimonial_json(id: u64) -> Value {
    json!({"id": id, "name": "Sita", "comment": "Great service"})
}

fn order_input() -> OrderInput {
    OrderInput {
        customer_name: "Ram".to_string(),
        customer_email: "ram@example.com".to_string(),
        customer_phone: "9800000000".to_string(),
        customer_address: "Baneshwor".to_string(),
        total_amount: "1500.00".to_string(),
        items: vec![OrderItemInput {
            product_id: 7,
            variant_id: None,
            quantity: 2,
            price: "750.00".to_string(),
        }],
        ..Default::default()
    }
}

fn order_json(status: &str) -> Value {
    json!({
        "id": 11,
        "customer_name": "Ram",
        "status": status,
        "is_paid": false,
        "items": []
    })
}

// ============================================================================
// Listing and Filters
// ============================================================================

#[tokio::test]
async fn test_search_term_is_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testimonial/"))
        .and(query_param("search", "chair"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let page = Testimonial::all(&client_for(&server), Some(BasicListParams::search("chair ")))
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_unset_filters_are_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/order/"))
        .and(query_param("search", "ram"))
        .and(query_param_is_missing("status"))
        .and(query_param_is_missing("is_manual"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [order_json("pending")],
            "count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = OrderListParams {
        search: Some("ram".to_string()),
        status: Some("all".to_string()),
        ..Default::default()
    };
    let page = Order::all(&client_for(&server), Some(params)).await.unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page[0].status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_collection_data_filters_use_field_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/collections/leads/data/"))
        .and(query_param("city", "Pokhara"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 4, "data": {"city": "Pokhara"}}],
            "count": 11,
            "page": 2,
            "page_size": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = CollectionDataFilters {
        page: Some(2),
        ..Default::default()
    }
    .filter("city", "Pokhara");
    let page = CollectionData::list(&client_for(&server), "leads", filters)
        .await
        .unwrap();

    assert_eq!(page[0].data["city"], "Pokhara");
    assert!(!page.has_next);
    assert!(page.has_previous);
}

#[tokio::test]
async fn test_paginated_envelope_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testimonial/"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [testimonial_json(1), testimonial_json(2)],
            "count": 5,
            "next": "https://bibek.nepdora.baliyoventures.com/api/testimonial/?page=2",
            "previous": null
        })))
        .mount(&server)
        .await;

    let page = Testimonial::all(&client_for(&server), Some(BasicListParams::page(1, 2)))
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[tokio::test]
async fn test_find_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testimonial/4/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(testimonial_json(4)))
        .mount(&server)
        .await;

    let testimonial = Testimonial::find(&client_for(&server), 4).await.unwrap();
    assert_eq!(testimonial.name, "Sita");
}

#[tokio::test]
async fn test_payment_gateway_by_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payment-gateway/"))
        .and(query_param("payment_type", "esewa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "payment_type": "esewa", "merchant_code": "EPAYTEST", "is_enabled": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let page = PaymentGateway::by_type(&client_for(&server), PaymentType::Esewa)
        .await
        .unwrap();
    assert_eq!(page[0].id.as_deref(), Some("2"));
    assert_eq!(page[0].payment_type, PaymentType::Esewa);
}

#[tokio::test]
async fn test_active_popup_ignores_inactive_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/popup/"))
        .and(query_param("is_active", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Old", "is_active": false},
            {"id": 2, "title": "Dashain sale", "is_active": true}
        ])))
        .mount(&server)
        .await;

    let popup = Popup::active(&client_for(&server)).await.unwrap().unwrap();
    assert_eq!(popup.id, 2);
}

#[tokio::test]
async fn test_no_active_popup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/popup/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(Popup::active(&client_for(&server)).await.unwrap().is_none());
}

// ============================================================================
// Create and Update
// ============================================================================

#[tokio::test]
async fn test_appointment_status_update_is_a_minimal_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/appointments/5/"))
        .and(body_json(json!({"status": "confirmed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "full_name": "Hari",
            "status": "confirmed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = AppointmentUpdate {
        status: Some(AppointmentStatus::Confirmed),
        ..Default::default()
    };
    let appointment = Appointment::update(&client_for(&server), 5, &update)
        .await
        .unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_client_logo_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/our-client/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "name": "Acme",
            "logo": "https://cdn.example.com/acme.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = OurClientInput {
        name: Some("Acme".to_string()),
        url: None,
        logo: Some(FileAttachment::new("acme.png", b"PNGDATA".to_vec()).with_mime("image/png")),
    };
    let created = OurClient::create(&client_for(&server), &input).await.unwrap();
    assert_eq!(created.name, "Acme");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"name\""));
    assert!(body.contains("Acme"));
    assert!(body.contains("name=\"logo\"; filename=\"acme.png\""));
    assert!(!body.contains("name=\"url\""));
}

#[tokio::test]
async fn test_storefront_order_is_placed_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/order/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_json("pending")))
        .expect(1)
        .mount(&server)
        .await;

    let order = Order::create(&client_for(&server), &order_input()).await.unwrap();
    assert_eq!(order.id, 11);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_customer_order_carries_customer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/order/"))
        .and(header("Authorization", "Bearer customer-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_json("pending")))
        .expect(1)
        .mount(&server)
        .await;

    Order::create_as(&client_for(&server), &order_input(), AuthPolicy::Customer)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_order_status_change_uses_admin_token() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/order/11/"))
        .and(header("Authorization", "Bearer admin-token"))
        .and(body_json(json!({"status": "shipped"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("shipped")))
        .expect(1)
        .mount(&server)
        .await;

    let order = Order::update_status(&client_for(&server), 11, OrderStatus::Shipped)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Shipped);
}

#[tokio::test]
async fn test_video_edit_is_a_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/videos/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "title": "Tour",
            "video_url": "https://youtu.be/abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = VideoInput {
        title: Some("Tour".to_string()),
        video_url: "https://youtu.be/abc".to_string(),
        ..Default::default()
    };
    let video = Video::replace(&client_for(&server), 3, &input).await.unwrap();
    assert_eq!(video.id, 3);
}

#[tokio::test]
async fn test_booking_update_sends_data_object() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/collections/booking/data/8/"))
        .and(body_json(json!({"data": {"status": "approved"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8,
            "data": {"status": "approved"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = BookingUpdate::new(Map::new()).with("status", "approved");
    let booking = Booking::update(&client_for(&server), 8, &update).await.unwrap();
    assert_eq!(booking.field("status"), Some(&json!("approved")));
}

#[tokio::test]
async fn test_popup_form_submission_acknowledged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/popup-form/"))
        .and(body_json(json!({"popup": 2, "email": "gita@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let mut fields = Map::new();
    fields.insert("email".to_string(), json!("gita@example.com"));
    let ack = PopupForm::submit(&client_for(&server), 2, fields).await.unwrap();
    assert!(ack.success);
    assert_eq!(ack.message.as_deref(), Some("Form submitted successfully!"));
}

#[tokio::test]
async fn test_portfolio_thumbnail_update_is_multipart_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/portfolio/kitchen-remodel/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "title": "Kitchen remodel",
            "slug": "kitchen-remodel",
            "thumbnail_image": "https://cdn.example.com/kitchen.png",
            "tags": [1, 2]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = PortfolioInput {
        title: Some("Kitchen remodel".to_string()),
        tags: Some(vec![1, 2]),
        thumbnail_image: Some(
            FileAttachment::new("kitchen.png", b"PNGDATA".to_vec()).with_mime("image/png"),
        ),
        ..Default::default()
    };
    let updated = Portfolio::update(&client_for(&server), "kitchen-remodel".to_string(), &input)
        .await
        .unwrap();
    assert_eq!(
        updated.thumbnail_image.as_deref(),
        Some("https://cdn.example.com/kitchen.png")
    );

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"thumbnail_image\"; filename=\"kitchen.png\""));
    assert!(body.contains("PNGDATA"));
    assert!(body.contains("name=\"title\""));
    assert_eq!(body.matches("name=\"tags\"").count(), 2);
    assert!(!body.contains("name=\"content\""));
}

// ============================================================================
// Change Tracking
// ============================================================================

#[tokio::test]
async fn test_tracked_record_patches_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/faq/5/"))
        .and(body_json(json!({"answer": "Within three days."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "question": "How fast is delivery?",
            "answer": "Within three days."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut tracked = TrackedResource::from_existing(Faq {
        id: 5,
        question: "How fast is delivery?".to_string(),
        answer: "Within a week.".to_string(),
    });
    tracked.answer = "Within three days.".to_string();
    assert!(tracked.is_dirty());

    let client = client_for(&server);
    tracked.save_changes(&client).await.unwrap();
    assert!(!tracked.is_dirty());
    assert_eq!(tracked.answer, "Within three days.");

    // Clean records are not sent again.
    tracked.save_changes(&client).await.unwrap();
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

// ============================================================================
// Delete Acknowledgements
// ============================================================================

#[tokio::test]
async fn test_delete_with_empty_body_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/testimonial/4/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ack = Testimonial::delete(&client_for(&server), 4).await.unwrap();
    assert!(ack.success);
    assert_eq!(ack.message.as_deref(), Some("Testimonial deleted successfully"));
}

#[tokio::test]
async fn test_delete_with_json_body_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/testimonial/4/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Removed"})),
        )
        .mount(&server)
        .await;

    let ack = Testimonial::delete(&client_for(&server), 4).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Removed"));
}

#[tokio::test]
async fn test_delete_with_blank_slug_is_rejected_before_sending() {
    let server = MockServer::start().await;

    let result = Service::delete(&client_for(&server), String::new()).await;

    assert!(matches!(
        result,
        Err(ResourceError::InvalidId {
            resource: "Service",
            key: "slug"
        })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_missing_record_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/testimonial/99/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let error = Testimonial::find(&client_for(&server), 99).await.unwrap_err();
    assert!(error.to_string().contains("Not found."));
    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "Testimonial", ref id, .. } if id == "99"
    ));
}

#[tokio::test]
async fn test_rejected_promo_code_maps_to_validation_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/promocode/validate/"))
        .and(body_json(json!({"code": "EXPIRED"})))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Promo code has expired"})),
        )
        .mount(&server)
        .await;

    let error = PromoCode::validate(&client_for(&server), " EXPIRED ")
        .await
        .unwrap_err();
    match error {
        ResourceError::ValidationFailed { code, message, .. } => {
            assert_eq!(code, 400);
            assert_eq!(message, "Promo code has expired");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_valid_promo_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/promocode/validate/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": true,
            "code": "DASHAIN",
            "discount_percentage": "10.00"
        })))
        .mount(&server)
        .await;

    let check = PromoCode::validate(&client_for(&server), "DASHAIN").await.unwrap();
    assert!(check.valid);
    assert_eq!(check.discount_percentage.as_deref(), Some("10.00"));
}

#[tokio::test]
async fn test_server_error_without_message_gets_resource_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/delivery-charges/1/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = DeliveryCharge::update(&client_for(&server), 1, &Default::default())
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(500));
    assert!(matches!(error, ResourceError::Http(HttpError::Response(_))));
    assert_eq!(error.to_string(), "Failed to update delivery charge");
}

// ============================================================================
// Uploads
// ============================================================================

#[tokio::test]
async fn test_bulk_upload_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bulk-upload/"))
        .and(header("Authorization", "Bearer admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Uploaded",
            "total_processed": 3,
            "successful": 3,
            "failed": 0,
            "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = FileAttachment::new("products.csv", b"name,price\nChair,100\n".to_vec())
        .with_mime("text/csv");
    let report = BulkUpload::upload(&client_for(&server), file).await.unwrap();
    assert!(report.is_complete());

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\"; filename=\"products.csv\""));
}

#[tokio::test]
async fn test_template_download_returns_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/download-template/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"name,price\n".to_vec(), "text/csv"),
        )
        .mount(&server)
        .await;

    let bytes = BulkUpload::download_template(&client_for(&server)).await.unwrap();
    assert_eq!(bytes, b"name,price\n");
}
