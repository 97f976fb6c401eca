mod file;
mod memory;

pub use file::*;
pub use memory::*;

use thiserror::Error;

/// Key under which the ledger keeps its operations by default
pub const DEFAULT_STORAGE_KEY: &str = "financeOperations";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Synchronous key/blob store. Each key holds one text value that is
/// replaced wholesale on save; there are no partial updates.
pub trait Storage {
    /// Read the blob under `key`, or `None` if the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the blob under `key`.
    fn save(&mut self, key: &str, text: &str) -> Result<(), StorageError>;

    /// Drop `key` entirely. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
