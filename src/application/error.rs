use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Stored operations are corrupt and were left untouched: {0}")]
    CorruptStore(#[source] serde_json::Error),

    #[error("Failed to serialize operations: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
