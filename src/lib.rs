pub mod application;
pub mod cli;
pub mod domain;
pub mod io;
pub mod storage;

pub use application::{FinanceLedger, LedgerConfig, LedgerError, Renderer};
pub use domain::*;
pub use storage::{FileStore, MemoryStore, Storage, StorageError};
