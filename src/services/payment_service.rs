//! Payment business logic
//!
//! Recording a payment appends to the payment collection and adds the
//! amount to the customer's `paidAmount`. The customer's `toBePaid` field
//! is intentionally left untouched; readers compute the live balance as
//! `previousBills + sum(bills) - sum(payments)`.

use chrono::Utc;
use thiserror::Error;

use crate::contracts::NewPaymentRequest;
use crate::repos::customer_repo;
use crate::repos::payment_repo::{self, Payment};
use crate::store::{RecordStore, StoreError};
use crate::validation::{validate_new_payment, ValidationError};

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Payments made by one customer.
pub async fn list_payments_by_customer(store: &dyn RecordStore, customer_id: &str) -> Vec<Payment> {
    payment_repo::list_by_customer(store, customer_id).await
}

/// Record a payment and roll its amount into the customer's `paidAmount`.
pub async fn record_payment(
    store: &dyn RecordStore,
    request: NewPaymentRequest,
) -> Result<Payment, PaymentError> {
    validate_new_payment(&request)?;

    let customer = customer_repo::find_by_id(store, &request.customer_id)
        .await
        .ok_or_else(|| PaymentError::CustomerNotFound(request.customer_id.clone()))?;

    if !request.paid_date.is_empty() {
        tracing::debug!(paid_date = %request.paid_date, "paidDate accepted but not persisted");
    }

    let payment = Payment {
        customer_id: customer.customer_id.clone(),
        customer_name: customer.customer_name.clone(),
        paying_amount: request.paying_amount,
        notes: request.notes,
        created_at: Utc::now(),
    };

    payment_repo::append(store, &payment).await?;

    let mut customer = customer;
    customer.paid_amount += payment.paying_amount;
    customer_repo::update(store, &customer).await?;

    tracing::info!(
        customer_id = %payment.customer_id,
        paying_amount = payment.paying_amount,
        "payment recorded"
    );

    Ok(payment)
}
