//! Bill collection access

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::{decode_collection, encode_collection};
use crate::store::{Collection, RecordStore, StoreError};

/// Bill record as persisted in `bills.json`.
///
/// `customerName` is a denormalized copy taken at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub bill_number: String,
    pub customer_id: String,
    pub customer_name: String,
    pub bill_amount: f64,
    pub bill_date: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Read all bills in insertion order.
pub async fn list(store: &dyn RecordStore) -> Vec<Bill> {
    let raw = store.read_all(Collection::Bills).await;
    decode_collection(Collection::Bills, raw)
}

/// Bills belonging to one customer, in insertion order.
pub async fn list_by_customer(store: &dyn RecordStore, customer_id: &str) -> Vec<Bill> {
    list(store)
        .await
        .into_iter()
        .filter(|bill| bill.customer_id == customer_id)
        .collect()
}

/// Whether any bill already carries this bill number. Uniqueness is
/// global, not per customer.
pub async fn number_exists(store: &dyn RecordStore, bill_number: &str) -> bool {
    list(store)
        .await
        .iter()
        .any(|bill| bill.bill_number == bill_number)
}

/// Append a bill and persist the whole collection.
pub async fn append(store: &dyn RecordStore, bill: &Bill) -> Result<(), StoreError> {
    let mut bills = list(store).await;
    bills.push(bill.clone());
    store.write_all(Collection::Bills, encode_collection(&bills)?).await
}
