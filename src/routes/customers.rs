//! Customer API routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::contracts::NewCustomerRequest;
use crate::repos::customer_repo::Customer;
use crate::routes::ApiError;
use crate::services::customer_service::{self, CustomerError};
use crate::store::RecordStore;

#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub success: bool,
    pub customers: Vec<Customer>,
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub success: bool,
    pub customer: Customer,
}

#[derive(Debug, Serialize)]
pub struct CustomerCreatedResponse {
    pub success: bool,
    pub message: String,
    pub customer: Customer,
}

/// Map service errors to HTTP status codes.
fn map_error(error: CustomerError) -> ApiError {
    match &error {
        CustomerError::Validation(_) => ApiError::new(StatusCode::BAD_REQUEST, error.to_string()),
        CustomerError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, error.to_string()),
        CustomerError::Store(err) => {
            tracing::error!(%err, "customer operation failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Handler for GET /api/customers
pub async fn list_customers(State(store): State<Arc<dyn RecordStore>>) -> Json<CustomerListResponse> {
    let customers = customer_service::list_customers(store.as_ref()).await;
    Json(CustomerListResponse {
        success: true,
        customers,
    })
}

/// Handler for GET /api/customers/{customer_id}
pub async fn get_customer(
    State(store): State<Arc<dyn RecordStore>>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = customer_service::get_customer(store.as_ref(), &customer_id)
        .await
        .map_err(map_error)?;

    Ok(Json(CustomerResponse {
        success: true,
        customer,
    }))
}

/// Handler for POST /api/customers
pub async fn create_customer(
    State(store): State<Arc<dyn RecordStore>>,
    Json(payload): Json<NewCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerCreatedResponse>), ApiError> {
    let customer = customer_service::create_customer(store.as_ref(), payload)
        .await
        .map_err(map_error)?;

    Ok((
        StatusCode::CREATED,
        Json(CustomerCreatedResponse {
            success: true,
            message: "Customer added successfully".to_string(),
            customer,
        }),
    ))
}
