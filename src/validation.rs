//! Validation for create requests
//!
//! Validators check fields in a fixed order and return the first failure,
//! so clients always see the earliest problem in the payload. Existence
//! and uniqueness checks that need store access live in the services.

use thiserror::Error;

use crate::contracts::{NewBillRequest, NewCustomerRequest, NewPaymentRequest};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("Previous bills cannot be negative, got {0}")]
    NegativePreviousBills(f64),

    #[error("Bill number must be exactly 4 digits, got {0} characters")]
    InvalidBillNumber(usize),

    #[error("Customer ID is required")]
    MissingCustomerId,

    #[error("Bill amount must be greater than 0, got {0}")]
    InvalidBillAmount(f64),

    #[error("Bill date is required")]
    MissingBillDate,

    #[error("Paying amount must be greater than 0, got {0}")]
    InvalidPayingAmount(f64),
}

/// Validate a create-customer payload.
///
/// Only `customerName` is required; the remaining fields default.
pub fn validate_new_customer(payload: &NewCustomerRequest) -> Result<(), ValidationError> {
    if payload.customer_name.trim().is_empty() {
        return Err(ValidationError::MissingCustomerName);
    }

    if payload.previous_bills < 0.0 {
        return Err(ValidationError::NegativePreviousBills(payload.previous_bills));
    }

    Ok(())
}

/// Validate a create-bill payload.
///
/// Order: bill number length, customer ID, amount, date.
pub fn validate_new_bill(payload: &NewBillRequest) -> Result<(), ValidationError> {
    if payload.bill_number.len() != 4 {
        return Err(ValidationError::InvalidBillNumber(payload.bill_number.len()));
    }

    if payload.customer_id.is_empty() {
        return Err(ValidationError::MissingCustomerId);
    }

    // Written as a negated comparison so NaN is rejected too.
    if !(payload.bill_amount > 0.0) {
        return Err(ValidationError::InvalidBillAmount(payload.bill_amount));
    }

    if payload.bill_date.trim().is_empty() {
        return Err(ValidationError::MissingBillDate);
    }

    Ok(())
}

/// Validate a create-payment payload.
///
/// Order: customer ID, amount. The optional `paidDate` is not validated.
pub fn validate_new_payment(payload: &NewPaymentRequest) -> Result<(), ValidationError> {
    if payload.customer_id.is_empty() {
        return Err(ValidationError::MissingCustomerId);
    }

    if !(payload.paying_amount > 0.0) {
        return Err(ValidationError::InvalidPayingAmount(payload.paying_amount));
    }

    Ok(())
}
