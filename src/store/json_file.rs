//! JSON-file implementation of the record store
//!
//! One pretty-printed JSON array file per collection under a data
//! directory. Each file is guarded by an async `RwLock` so a single
//! primitive never observes a half-written file, but no transaction spans
//! multiple primitives or multiple collections.

use std::path::PathBuf;

use serde_json::Value;
use tokio::fs;
use tokio::sync::RwLock;

use super::{Collection, RecordStore, StoreError};

/// File-backed store holding `customers.json`, `bills.json`, and
/// `payments.json` under a single data directory.
pub struct JsonFileStore {
    data_dir: PathBuf,
    locks: [RwLock<()>; 3],
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        JsonFileStore {
            data_dir: data_dir.into(),
            locks: Default::default(),
        }
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}

#[async_trait::async_trait]
impl RecordStore for JsonFileStore {
    async fn ensure_collection(&self, collection: Collection) -> Result<(), StoreError> {
        let _guard = self.locks[collection.index()].write().await;

        fs::create_dir_all(&self.data_dir).await?;

        let path = self.path_for(collection);
        if !fs::try_exists(&path).await? {
            fs::write(&path, b"[]").await?;
            tracing::info!(%collection, path = %path.display(), "created empty collection file");
        }

        Ok(())
    }

    async fn read_all(&self, collection: Collection) -> Vec<Value> {
        let _guard = self.locks[collection.index()].read().await;

        let path = self.path_for(collection);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(
                    %collection,
                    path = %path.display(),
                    %err,
                    "failed to read collection file, treating as empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    %collection,
                    path = %path.display(),
                    %err,
                    "failed to parse collection file, treating as empty"
                );
                Vec::new()
            }
        }
    }

    async fn write_all(&self, collection: Collection, records: Vec<Value>) -> Result<(), StoreError> {
        let _guard = self.locks[collection.index()].write().await;

        let data = serde_json::to_vec_pretty(&records)?;
        fs::write(self.path_for(collection), data).await?;

        Ok(())
    }
}
