use anyhow::Result;
use std::io::Write;

use crate::application::FinanceLedger;
use crate::storage::Storage;

/// Column order shared by CSV export and import
pub const CSV_HEADER: [&str; 5] = ["profile", "amount", "category", "comment", "time"];

/// Exporter for writing ledger contents to CSV or JSON
pub struct Exporter<'a, S: Storage> {
    ledger: &'a FinanceLedger<S>,
}

impl<'a, S: Storage> Exporter<'a, S> {
    pub fn new(ledger: &'a FinanceLedger<S>) -> Self {
        Self { ledger }
    }

    /// Export every operation, in stored order, as CSV.
    /// An unreadable store is an error, never an empty export.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let operations = self.ledger.try_all_operations()?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(CSV_HEADER)?;
        for op in &operations {
            csv_writer.write_record(&[
                op.profile.clone(),
                op.amount.to_string(),
                op.category.clone(),
                op.comment.clone(),
                op.time.to_rfc3339(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(operations.len())
    }

    /// Export every operation, in stored order, as a pretty-printed JSON array
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let operations = self.ledger.try_all_operations()?;
        serde_json::to_writer_pretty(&mut writer, &operations)?;
        writeln!(writer)?;
        Ok(operations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn sample_ledger() -> FinanceLedger<MemoryStore> {
        let mut ledger = FinanceLedger::new(MemoryStore::new());
        ledger
            .add_operation("personal", "1500", "income", Some("Salary"), Some("2024-01-01T09:00:00Z"))
            .unwrap();
        ledger
            .add_operation("personal", "12.5", "food", Some("Coffee, croissant"), Some("2024-01-02T08:15:00Z"))
            .unwrap();
        ledger
    }

    #[test]
    fn test_export_csv() {
        let ledger = sample_ledger();
        let mut buf = Vec::new();
        let count = Exporter::new(&ledger).export_csv(&mut buf).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "profile,amount,category,comment,time");
        assert_eq!(lines[1], "personal,1500,income,Salary,2024-01-01T09:00:00+00:00");
        assert_eq!(
            lines[2],
            "personal,12.5,food,\"Coffee, croissant\",2024-01-02T08:15:00+00:00"
        );
    }

    #[test]
    fn test_export_json() {
        let ledger = sample_ledger();
        let mut buf = Vec::new();
        let count = Exporter::new(&ledger).export_json(&mut buf).unwrap();
        assert_eq!(count, 2);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["comment"], "Salary");
        assert_eq!(items[1]["amount"], 12.5);
    }

    #[test]
    fn test_export_fails_on_corrupt_store() {
        use crate::storage::DEFAULT_STORAGE_KEY;

        let store = MemoryStore::new().with_entry(DEFAULT_STORAGE_KEY, "[{\"profile\": trunc");
        let ledger = FinanceLedger::new(store);

        let mut buf = Vec::new();
        assert!(Exporter::new(&ledger).export_json(&mut buf).is_err());
        assert!(buf.is_empty());
        assert!(Exporter::new(&ledger).export_csv(Vec::new()).is_err());
    }

    #[test]
    fn test_export_empty() {
        let ledger = FinanceLedger::new(MemoryStore::new());
        let mut buf = Vec::new();
        assert_eq!(Exporter::new(&ledger).export_json(&mut buf).unwrap(), 0);
        assert_eq!(String::from_utf8(buf).unwrap().trim(), "[]");
    }
}
