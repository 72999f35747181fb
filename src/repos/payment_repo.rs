//! Payment collection access

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::{decode_collection, encode_collection};
use crate::store::{Collection, RecordStore, StoreError};

/// Payment record as persisted in `payments.json`.
///
/// `createdAt` is the only timestamp; no caller-supplied date is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub customer_id: String,
    pub customer_name: String,
    pub paying_amount: f64,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Read all payments in insertion order.
pub async fn list(store: &dyn RecordStore) -> Vec<Payment> {
    let raw = store.read_all(Collection::Payments).await;
    decode_collection(Collection::Payments, raw)
}

/// Payments made by one customer, in insertion order.
pub async fn list_by_customer(store: &dyn RecordStore, customer_id: &str) -> Vec<Payment> {
    list(store)
        .await
        .into_iter()
        .filter(|payment| payment.customer_id == customer_id)
        .collect()
}

/// Append a payment and persist the whole collection.
pub async fn append(store: &dyn RecordStore, payment: &Payment) -> Result<(), StoreError> {
    let mut payments = list(store).await;
    payments.push(payment.clone());
    store
        .write_all(Collection::Payments, encode_collection(&payments)?)
        .await
}
