// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use finledger::{FileStore, FinanceLedger, MemoryStore, Operation};
use tempfile::TempDir;

/// Helper to create a ledger over a fresh in-memory store
pub fn memory_ledger() -> FinanceLedger<MemoryStore> {
    FinanceLedger::new(MemoryStore::new())
}

/// Helper to create a ledger over a temporary data directory
pub fn file_ledger() -> Result<(FinanceLedger<FileStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let ledger = FinanceLedger::new(FileStore::new(temp_dir.path().join("data")));
    Ok((ledger, temp_dir))
}

/// Comments of a listing, for order assertions
pub fn comments(operations: &[Operation]) -> Vec<String> {
    operations.iter().map(|op| op.comment.clone()).collect()
}

/// Test fixture: a small household ledger over two profiles
pub struct Household;

impl Household {
    pub fn record<S: finledger::Storage>(ledger: &mut FinanceLedger<S>) -> Result<()> {
        ledger.add_operation("personal", "2500", "income", Some("Salary"), Some("2024-01-01T09:00"))?;
        ledger.add_operation("business", "800", "rent", Some("Office"), Some("2024-01-02T10:00"))?;
        ledger.add_operation("personal", "45.90", "food", Some("Groceries"), Some("2024-01-03T18:30"))?;
        ledger.add_operation("personal", "12", "transport", Some("Metro"), Some("2024-01-04T08:10"))?;
        ledger.add_operation("business", "3000", "income", Some("Invoice #12"), Some("2024-01-05T12:00"))?;
        Ok(())
    }
}
