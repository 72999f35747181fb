//! Flat-file record storage for the bookkeeping collections
//!
//! The service persists three independent collections (customers, bills,
//! payments), each a JSON array in its own file. Business logic depends on
//! the [`RecordStore`] trait rather than on files directly, so a different
//! backing store can be swapped in without touching the service layer.

use serde_json::Value;
use thiserror::Error;

mod json_file;

pub use json_file::JsonFileStore;

/// The three persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Customers,
    Bills,
    Payments,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Customers, Collection::Bills, Collection::Payments];

    /// File name of the backing JSON array file.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Customers => "customers.json",
            Collection::Bills => "bills.json",
            Collection::Payments => "payments.json",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Collection::Customers => 0,
            Collection::Bills => 1,
            Collection::Payments => 2,
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Collection::Customers => "customers",
            Collection::Bills => "bills",
            Collection::Payments => "payments",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while persisting a collection.
///
/// Read-side faults never surface here: `read_all` fails soft and yields an
/// empty collection instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage primitives for the three collections.
///
/// Whole-collection rewrite is the only mutation primitive; there is no
/// row-level update.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Create the backing file with an empty array if absent. Idempotent.
    async fn ensure_collection(&self, collection: Collection) -> Result<(), StoreError>;

    /// Read the full ordered record sequence. On read or parse failure the
    /// collection is treated as empty and the failure is logged.
    async fn read_all(&self, collection: Collection) -> Vec<Value>;

    /// Overwrite the backing file with the full serialized sequence.
    async fn write_all(&self, collection: Collection, records: Vec<Value>) -> Result<(), StoreError>;
}
