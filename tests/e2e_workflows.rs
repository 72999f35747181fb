mod common;

use axum::http::StatusCode;
use serde_json::json;

/// Full bookkeeping flow: create a customer, bill them, record a partial
/// payment, and verify every derived field along the way.
#[tokio::test]
async fn test_customer_bill_payment_workflow() {
    let store = common::setup_store().await;
    let app = common::app(&store);

    // Create customer
    let response = common::post_json(&app, "/api/customers", json!({ "customerName": "Alice" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = common::body_json(response).await;
    assert_eq!(body["customer"]["customerId"], "CUST001");
    assert_eq!(body["customer"]["toBePaid"].as_f64().unwrap(), 0.0);

    // Bill the customer
    let response = common::post_json(
        &app,
        "/api/bills",
        json!({
            "billNumber": "1001",
            "customerId": "CUST001",
            "billAmount": 500,
            "billDate": "2024-01-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let customer = common::fetch_customer(&app, "CUST001").await;
    assert_eq!(customer["toBePaid"].as_f64().unwrap(), 500.0);

    // Record a partial payment
    let response = common::post_json(
        &app,
        "/api/payments",
        json!({ "customerId": "CUST001", "payingAmount": 200 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let customer = common::fetch_customer(&app, "CUST001").await;
    assert_eq!(customer["paidAmount"].as_f64().unwrap(), 200.0);
    assert_eq!(customer["toBePaid"].as_f64().unwrap(), 500.0);

    common::teardown(store).await;
}

/// Two bills with different numbers accumulate the balance, and the bill
/// reference list holds each number exactly once.
#[tokio::test]
async fn test_two_bills_accumulate_balance() {
    let store = common::setup_store().await;
    let app = common::app(&store);

    let customer_id = common::seed_customer(&app, "Bob").await;

    common::seed_bill(&app, &customer_id, "2001", 300.0).await;
    common::seed_bill(&app, &customer_id, "2002", 450.0).await;

    let customer = common::fetch_customer(&app, &customer_id).await;
    assert_eq!(customer["toBePaid"].as_f64().unwrap(), 750.0);
    assert_eq!(customer["bills"], json!(["2001", "2002"]));

    common::teardown(store).await;
}

/// Collections survive a service restart against the same data directory.
#[tokio::test]
async fn test_data_survives_restart() {
    let store = common::setup_store().await;
    let app = common::app(&store);

    let customer_id = common::seed_customer(&app, "Alice").await;
    common::seed_bill(&app, &customer_id, "1001", 500.0).await;

    // Rebuild the store and router over the same directory.
    let restarted = common::reopen_store(&store).await;
    let app = common::app(&restarted);

    let customer = common::fetch_customer(&app, &customer_id).await;
    assert_eq!(customer["customerName"], "Alice");
    assert_eq!(customer["toBePaid"].as_f64().unwrap(), 500.0);

    let response = common::get(&app, "/api/bills").await;
    let body = common::body_json(response).await;
    assert_eq!(body["bills"].as_array().unwrap().len(), 1);

    common::teardown(store).await;
}

/// Root and health endpoints answer without touching the store.
#[tokio::test]
async fn test_status_endpoints() {
    let store = common::setup_store().await;
    let app = common::app(&store);

    let response = common::get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Loan API is running");
    assert_eq!(body["status"], "success");

    let response = common::get(&app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "loanbook-rs");

    common::teardown(store).await;
}
