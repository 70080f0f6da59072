//! Handler tests for the Inquiries domain
//!
//! Exercise the `/` POST route of `handlers::router` in isolation with an
//! in-memory repository, so no MongoDB is needed.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_inquiries::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // For oneshot()

#[derive(Clone, Default)]
struct InMemoryRepository {
    stored: Arc<Mutex<Vec<Inquiry>>>,
}

#[async_trait]
impl InquiryRepository for InMemoryRepository {
    async fn insert(&self, inquiry: Inquiry) -> InquiryResult<String> {
        let mut stored = self.stored.lock().unwrap();
        stored.push(inquiry);
        Ok(format!("{:024x}", stored.len()))
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_valid_inquiry_returns_success_and_id() {
    let repo = InMemoryRepository::default();
    let app = handlers::router(InquiryService::new(repo.clone()));

    let response = app
        .oneshot(post_json(json!({
            "name": "Jo Smith",
            "email": "jo@example.com",
            "message": "Interested in a new website redesign."
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: InquirySubmitted = json_body(response.into_body()).await;
    assert_eq!(body.status, "success");
    assert!(!body.id.is_empty());

    let stored = repo.stored.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "jo@example.com");
    assert_eq!(stored[0].company, None);
}

#[tokio::test]
async fn test_each_submission_gets_a_new_record() {
    let repo = InMemoryRepository::default();
    let app = handlers::router(InquiryService::new(repo.clone()));
    let payload = json!({
        "name": "Jo Smith",
        "email": "jo@example.com",
        "message": "Interested in a new website redesign."
    });

    let first: InquirySubmitted =
        json_body(app.clone().oneshot(post_json(payload.clone())).await.unwrap().into_body()).await;
    let second: InquirySubmitted =
        json_body(app.oneshot(post_json(payload)).await.unwrap().into_body()).await;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.stored.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_invalid_inquiry_returns_422_without_storing() {
    let repo = InMemoryRepository::default();
    let app = handlers::router(InquiryService::new(repo.clone()));

    let response = app
        .oneshot(post_json(json!({
            "name": "A",
            "email": "not-an-email",
            "message": "short"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    for field in ["name", "email", "message"] {
        assert!(body["details"][field].is_array(), "missing {field}");
    }
    assert!(repo.stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_type_is_reported_with_other_invalid_fields() {
    let repo = InMemoryRepository::default();
    let app = handlers::router(InquiryService::new(repo.clone()));

    let response = app
        .oneshot(post_json(json!({
            "name": 5,
            "email": "bad",
            "message": "short"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["name"][0]["code"], "type");
    assert_eq!(body["details"]["email"][0]["code"], "email");
    assert_eq!(body["details"]["message"][0]["code"], "length");
    assert!(repo.stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_address_without_dotted_domain_returns_422() {
    let repo = InMemoryRepository::default();
    let app = handlers::router(InquiryService::new(repo.clone()));

    let response = app
        .oneshot(post_json(json!({
            "name": "Jo Smith",
            "email": "jo@localhost",
            "message": "Interested in a new website redesign."
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["details"]["email"][0]["code"], "email");
    assert!(repo.stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_required_fields_return_422() {
    let repo = InMemoryRepository::default();
    let app = handlers::router(InquiryService::new(repo.clone()));

    let response = app
        .oneshot(post_json(json!({ "company": "Acme" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(repo.stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_storage_not_initialized_returns_500_with_cause() {
    let app = handlers::router(InquiryService::new(MongoInquiryRepository::new(None)));

    let response = app
        .oneshot(post_json(json!({
            "name": "Jo Smith",
            "email": "jo@example.com",
            "message": "Interested in a new website redesign."
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "DATABASE_UNAVAILABLE");
    assert_eq!(body["message"], "Database not initialized");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = handlers::router(InquiryService::new(InMemoryRepository::default()));

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
