//! Common test utilities
//!
//! Every test builds the real application router over a file store rooted
//! in a unique temp directory, so tests are hermetic and safe to run in
//! parallel.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use loanbook_rs::routes::api_router;
use loanbook_rs::store::{Collection, JsonFileStore, RecordStore};

pub struct TestStore {
    pub store: Arc<dyn RecordStore>,
    pub data_dir: PathBuf,
}

/// Create an isolated file store under a unique temp directory with all
/// three collection files initialized.
pub async fn setup_store() -> TestStore {
    let data_dir = std::env::temp_dir().join(format!("loanbook-test-{}", Uuid::new_v4()));
    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&data_dir));

    for collection in Collection::ALL {
        store
            .ensure_collection(collection)
            .await
            .expect("Failed to initialize collection file");
    }

    TestStore { store, data_dir }
}

/// Build the full application router for testing.
pub fn app(test_store: &TestStore) -> Router {
    api_router(test_store.store.clone())
}

/// Open a fresh store over an existing data directory, simulating a
/// service restart.
pub async fn reopen_store(test_store: &TestStore) -> TestStore {
    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&test_store.data_dir));

    for collection in Collection::ALL {
        store
            .ensure_collection(collection)
            .await
            .expect("Failed to initialize collection file");
    }

    TestStore {
        store,
        data_dir: test_store.data_dir.clone(),
    }
}

/// Remove the test data directory.
pub async fn teardown(test_store: TestStore) {
    tokio::fs::remove_dir_all(&test_store.data_dir).await.ok();
}

/// Read a response body as JSON.
pub async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send a GET request through the router.
pub async fn get(app: &Router, uri: &str) -> axum::http::Response<Body> {
    app.clone()
        .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> axum::http::Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Create a customer through the API and return its generated ID.
pub async fn seed_customer(app: &Router, name: &str) -> String {
    let response = post_json(app, "/api/customers", serde_json::json!({ "customerName": name })).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let json = body_json(response).await;
    json["customer"]["customerId"].as_str().unwrap().to_string()
}

/// Create a bill for a customer through the API.
pub async fn seed_bill(app: &Router, customer_id: &str, bill_number: &str, amount: f64) {
    let response = post_json(
        app,
        "/api/bills",
        serde_json::json!({
            "billNumber": bill_number,
            "customerId": customer_id,
            "billAmount": amount,
            "billDate": "2024-01-01"
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
}

/// Fetch a customer record through the API.
pub async fn fetch_customer(app: &Router, customer_id: &str) -> serde_json::Value {
    let response = get(app, &format!("/api/customers/{}", customer_id)).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let json = body_json(response).await;
    json["customer"].clone()
}
