pub mod bill_repo;
pub mod customer_repo;
pub mod payment_repo;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::store::{Collection, StoreError};

/// Decode a raw record sequence into typed records.
///
/// The whole collection decodes as one unit: a shape mismatch is treated
/// like an unreadable file, yielding the empty collection. Records missing
/// newer fields are normalized through their serde defaults.
pub(crate) fn decode_collection<T: DeserializeOwned>(collection: Collection, raw: Vec<Value>) -> Vec<T> {
    match serde_json::from_value(Value::Array(raw)) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(%collection, %err, "collection records failed to decode, treating as empty");
            Vec::new()
        }
    }
}

pub(crate) fn encode_collection<T: Serialize>(records: &[T]) -> Result<Vec<Value>, StoreError> {
    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(StoreError::from))
        .collect()
}
