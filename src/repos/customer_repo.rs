//! Customer collection access and ID generation

use serde::{Deserialize, Serialize};

use crate::repos::{decode_collection, encode_collection};
use crate::store::{Collection, RecordStore, StoreError};

/// Prefix of every generated customer ID.
pub const CUSTOMER_ID_PREFIX: &str = "CUST";

/// Customer record as persisted in `customers.json`.
///
/// `bills`, `paidAmount`, and `toBePaid` default when absent so records
/// written before those fields existed load normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub previous_bills: f64,
    #[serde(default)]
    pub bills: Vec<String>,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub to_be_paid: f64,
}

/// Read all customers in insertion order.
pub async fn list(store: &dyn RecordStore) -> Vec<Customer> {
    let raw = store.read_all(Collection::Customers).await;
    decode_collection(Collection::Customers, raw)
}

/// Find a customer by exact `customerId` match.
pub async fn find_by_id(store: &dyn RecordStore, customer_id: &str) -> Option<Customer> {
    list(store)
        .await
        .into_iter()
        .find(|customer| customer.customer_id == customer_id)
}

/// Append a customer and persist the whole collection.
pub async fn append(store: &dyn RecordStore, customer: &Customer) -> Result<(), StoreError> {
    let mut customers = list(store).await;
    customers.push(customer.clone());
    store
        .write_all(Collection::Customers, encode_collection(&customers)?)
        .await
}

/// Replace the stored record matching `customer_id` and persist.
///
/// A missing target leaves the collection unchanged.
pub async fn update(store: &dyn RecordStore, customer: &Customer) -> Result<(), StoreError> {
    let mut customers = list(store).await;

    match customers.iter_mut().find(|c| c.customer_id == customer.customer_id) {
        Some(existing) => *existing = customer.clone(),
        None => {
            tracing::warn!(customer_id = %customer.customer_id, "update target not found in collection");
            return Ok(());
        }
    }

    store
        .write_all(Collection::Customers, encode_collection(&customers)?)
        .await
}

/// Next customer ID in the `CUST` + 3-digit sequence.
///
/// Derived from the maximum numeric suffix across the whole collection;
/// an ID whose suffix does not parse contributes nothing. An empty
/// collection starts at `CUST001`.
pub fn next_customer_id(existing: &[Customer]) -> String {
    let max = existing
        .iter()
        .filter_map(|customer| customer.customer_id.strip_prefix(CUSTOMER_ID_PREFIX))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    format!("{}{:03}", CUSTOMER_ID_PREFIX, max + 1)
}
