//! Bill API routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::contracts::NewBillRequest;
use crate::repos::bill_repo::Bill;
use crate::routes::ApiError;
use crate::services::bill_service::{self, BillError};
use crate::store::RecordStore;

#[derive(Debug, Serialize)]
pub struct BillListResponse {
    pub success: bool,
    pub bills: Vec<Bill>,
}

#[derive(Debug, Serialize)]
pub struct BillCreatedResponse {
    pub success: bool,
    pub message: String,
    pub bill: Bill,
}

/// Map service errors to HTTP status codes.
fn map_error(error: BillError) -> ApiError {
    match &error {
        BillError::Validation(_)
        | BillError::CustomerNotFound(_)
        | BillError::DuplicateBillNumber(_) => {
            ApiError::new(StatusCode::BAD_REQUEST, error.to_string())
        }
        BillError::Store(err) => {
            tracing::error!(%err, "bill operation failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Handler for GET /api/bills
pub async fn list_bills(State(store): State<Arc<dyn RecordStore>>) -> Json<BillListResponse> {
    let bills = bill_service::list_bills(store.as_ref()).await;
    Json(BillListResponse {
        success: true,
        bills,
    })
}

/// Handler for GET /api/bills/customer/{customer_id}
pub async fn list_bills_by_customer(
    State(store): State<Arc<dyn RecordStore>>,
    Path(customer_id): Path<String>,
) -> Json<BillListResponse> {
    let bills = bill_service::list_bills_by_customer(store.as_ref(), &customer_id).await;
    Json(BillListResponse {
        success: true,
        bills,
    })
}

/// Handler for POST /api/bills
pub async fn create_bill(
    State(store): State<Arc<dyn RecordStore>>,
    Json(payload): Json<NewBillRequest>,
) -> Result<(StatusCode, Json<BillCreatedResponse>), ApiError> {
    let bill = bill_service::create_bill(store.as_ref(), payload)
        .await
        .map_err(map_error)?;

    Ok((
        StatusCode::CREATED,
        Json(BillCreatedResponse {
            success: true,
            message: "Bill added successfully".to_string(),
            bill,
        }),
    ))
}
