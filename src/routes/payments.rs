//! Payment API routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::contracts::NewPaymentRequest;
use crate::repos::payment_repo::Payment;
use crate::routes::ApiError;
use crate::services::payment_service::{self, PaymentError};
use crate::store::RecordStore;

#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    pub success: bool,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Serialize)]
pub struct PaymentCreatedResponse {
    pub success: bool,
    pub message: String,
    pub payment: Payment,
}

/// Map service errors to HTTP status codes.
fn map_error(error: PaymentError) -> ApiError {
    match &error {
        PaymentError::Validation(_) | PaymentError::CustomerNotFound(_) => {
            ApiError::new(StatusCode::BAD_REQUEST, error.to_string())
        }
        PaymentError::Store(err) => {
            tracing::error!(%err, "payment operation failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Handler for GET /api/payments/customer/{customer_id}
pub async fn list_payments_by_customer(
    State(store): State<Arc<dyn RecordStore>>,
    Path(customer_id): Path<String>,
) -> Json<PaymentListResponse> {
    let payments = payment_service::list_payments_by_customer(store.as_ref(), &customer_id).await;
    Json(PaymentListResponse {
        success: true,
        payments,
    })
}

/// Handler for POST /api/payments
pub async fn create_payment(
    State(store): State<Arc<dyn RecordStore>>,
    Json(payload): Json<NewPaymentRequest>,
) -> Result<(StatusCode, Json<PaymentCreatedResponse>), ApiError> {
    let payment = payment_service::record_payment(store.as_ref(), payload)
        .await
        .map_err(map_error)?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentCreatedResponse {
            success: true,
            message: "Payment recorded successfully".to_string(),
            payment,
        }),
    ))
}
