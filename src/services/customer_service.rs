//! Customer business logic
//!
//! Creation assigns the next `CUST`-sequence ID and seeds the balance
//! fields: `toBePaid` starts at `previousBills`, `paidAmount` at 0.

use thiserror::Error;

use crate::contracts::NewCustomerRequest;
use crate::repos::customer_repo::{self, Customer};
use crate::store::{RecordStore, StoreError};
use crate::validation::{validate_new_customer, ValidationError};

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// All customers, unfiltered and unpaginated.
pub async fn list_customers(store: &dyn RecordStore) -> Vec<Customer> {
    customer_repo::list(store).await
}

/// Look up one customer by ID.
pub async fn get_customer(store: &dyn RecordStore, customer_id: &str) -> Result<Customer, CustomerError> {
    customer_repo::find_by_id(store, customer_id)
        .await
        .ok_or_else(|| CustomerError::NotFound(customer_id.to_string()))
}

/// Create a customer with a freshly generated ID.
pub async fn create_customer(
    store: &dyn RecordStore,
    request: NewCustomerRequest,
) -> Result<Customer, CustomerError> {
    validate_new_customer(&request)?;

    let customers = customer_repo::list(store).await;
    let customer_id = customer_repo::next_customer_id(&customers);

    let customer = Customer {
        customer_id,
        customer_name: request.customer_name.trim().to_string(),
        location: request.location.trim().to_string(),
        contact_number: request.contact_number.trim().to_string(),
        previous_bills: request.previous_bills,
        bills: Vec::new(),
        paid_amount: 0.0,
        to_be_paid: request.previous_bills,
    };

    customer_repo::append(store, &customer).await?;

    tracing::info!(
        customer_id = %customer.customer_id,
        customer_name = %customer.customer_name,
        "customer created"
    );

    Ok(customer)
}
