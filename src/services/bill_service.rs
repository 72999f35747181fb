//! Bill business logic
//!
//! Creating a bill touches two collections: the bill is appended to the
//! bill collection, then the owning customer's `bills` list and `toBePaid`
//! balance are updated. The two writes are independent file rewrites; a
//! failure between them leaves the collections inconsistent (last write
//! wins, no rollback).

use chrono::Utc;
use thiserror::Error;

use crate::contracts::NewBillRequest;
use crate::repos::bill_repo::{self, Bill};
use crate::repos::customer_repo;
use crate::store::{RecordStore, StoreError};
use crate::validation::{validate_new_bill, ValidationError};

#[derive(Debug, Error)]
pub enum BillError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Bill number already exists: {0}")]
    DuplicateBillNumber(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// All bills, unfiltered.
pub async fn list_bills(store: &dyn RecordStore) -> Vec<Bill> {
    bill_repo::list(store).await
}

/// Bills for one customer.
pub async fn list_bills_by_customer(store: &dyn RecordStore, customer_id: &str) -> Vec<Bill> {
    bill_repo::list_by_customer(store, customer_id).await
}

/// Create a bill and roll its amount into the customer's balance.
pub async fn create_bill(store: &dyn RecordStore, request: NewBillRequest) -> Result<Bill, BillError> {
    validate_new_bill(&request)?;

    let customer = customer_repo::find_by_id(store, &request.customer_id)
        .await
        .ok_or_else(|| BillError::CustomerNotFound(request.customer_id.clone()))?;

    if bill_repo::number_exists(store, &request.bill_number).await {
        return Err(BillError::DuplicateBillNumber(request.bill_number));
    }

    let bill = Bill {
        bill_number: request.bill_number,
        customer_id: customer.customer_id.clone(),
        customer_name: customer.customer_name.clone(),
        bill_amount: request.bill_amount,
        bill_date: request.bill_date,
        notes: request.notes,
        created_at: Utc::now(),
    };

    bill_repo::append(store, &bill).await?;

    let mut customer = customer;
    if !customer.bills.contains(&bill.bill_number) {
        customer.bills.push(bill.bill_number.clone());
    }
    customer.to_be_paid += bill.bill_amount;
    customer_repo::update(store, &customer).await?;

    tracing::info!(
        bill_number = %bill.bill_number,
        customer_id = %bill.customer_id,
        bill_amount = bill.bill_amount,
        "bill created"
    );

    Ok(bill)
}
