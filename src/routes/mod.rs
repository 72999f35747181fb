//! HTTP routes
//!
//! Every endpoint responds with the `{success, message?, <entity>?}`
//! envelope. Failures map to an [`ApiError`] carrying the status code and
//! a human-readable message; unexpected faults become a generic 500 with
//! the detail logged server-side only.

pub mod bills;
pub mod customers;
pub mod payments;
pub mod status;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::health::health;
use crate::store::RecordStore;

/// Error envelope body: `{success: false, message}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

/// HTTP error response wrapper.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            success: false,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Build the full application router over a record store.
pub fn api_router(store: Arc<dyn RecordStore>) -> Router {
    Router::new()
        .route("/", get(status::root_status))
        .route("/api/health", get(health))
        .route(
            "/api/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route("/api/customers/{customer_id}", get(customers::get_customer))
        .route("/api/bills", get(bills::list_bills).post(bills::create_bill))
        .route("/api/bills/customer/{customer_id}", get(bills::list_bills_by_customer))
        .route("/api/payments", post(payments::create_payment))
        .route(
            "/api/payments/customer/{customer_id}",
            get(payments::list_payments_by_customer),
        )
        .with_state(store)
}
