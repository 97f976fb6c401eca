use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::io::Read;

use crate::application::FinanceLedger;
use crate::domain::{parse_amount, parse_timestamp, Operation};
use crate::storage::Storage;

/// Result of an import operation
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub imported: usize,
    pub errors: Vec<ImportError>,
}

/// A record that was rejected during import
#[derive(Debug, Clone)]
pub struct ImportError {
    /// 1-based: CSV line number, or position in the JSON array
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Validate and count, but leave the ledger untouched
    pub dry_run: bool,
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    profile: String,
    amount: String,
    category: String,
    #[serde(default)]
    comment: String,
    time: String,
}

/// Importer for appending operations from CSV or JSON.
/// Valid records are appended in one write; invalid ones are reported and skipped.
pub struct Importer<'a, S: Storage> {
    ledger: &'a mut FinanceLedger<S>,
}

impl<'a, S: Storage> Importer<'a, S> {
    pub fn new(ledger: &'a mut FinanceLedger<S>) -> Self {
        Self { ledger }
    }

    /// Import operations from CSV with the export header
    pub fn import_csv<R: Read>(&mut self, reader: R, options: ImportOptions) -> Result<ImportResult> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut valid = Vec::new();
        let mut errors = Vec::new();

        for (index, result) in csv_reader.deserialize::<CsvRecord>().enumerate() {
            let line = index + 2; // header + 1-based

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    errors.push(ImportError {
                        line,
                        field: None,
                        error: format!("CSV parse error: {}", e),
                    });
                    continue;
                }
            };

            match self.record_to_operation(record) {
                Ok(op) => valid.push(op),
                Err((field, error)) => errors.push(ImportError {
                    line,
                    field: Some(field.to_string()),
                    error,
                }),
            }
        }

        self.finish(valid, errors, options)
    }

    /// Import operations from a JSON array in the store format
    pub fn import_json<R: Read>(&mut self, reader: R, options: ImportOptions) -> Result<ImportResult> {
        let value: serde_json::Value =
            serde_json::from_reader(reader).context("Input is not valid JSON")?;
        let serde_json::Value::Array(items) = value else {
            bail!("Expected a JSON array of operations");
        };

        let mut valid = Vec::new();
        let mut errors = Vec::new();

        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<Operation>(item) {
                Ok(mut op) => {
                    op.comment = self.ledger.config().comment_or_default(Some(&op.comment));
                    valid.push(op);
                }
                Err(e) => errors.push(ImportError {
                    line: index + 1,
                    field: None,
                    error: e.to_string(),
                }),
            }
        }

        self.finish(valid, errors, options)
    }

    fn record_to_operation(&self, record: CsvRecord) -> Result<Operation, (&'static str, String)> {
        let amount = parse_amount(&record.amount)
            .map_err(|e| ("amount", format!("Invalid amount: {}", e)))?;
        let time = parse_timestamp(&record.time)
            .ok_or_else(|| ("time", format!("Invalid time: '{}'", record.time)))?;
        let comment = self.ledger.config().comment_or_default(Some(&record.comment));

        Ok(Operation::new(record.profile, amount, record.category, time).with_comment(comment))
    }

    fn finish(
        &mut self,
        valid: Vec<Operation>,
        errors: Vec<ImportError>,
        options: ImportOptions,
    ) -> Result<ImportResult> {
        let imported = if options.dry_run {
            valid.len()
        } else {
            self.ledger.import_operations(valid)?
        };
        Ok(ImportResult { imported, errors })
    }
}
