use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{
    distinct_profiles, operations_for_profile, parse_amount, parse_timestamp, Operation,
};
use crate::storage::Storage;

use super::{summarize, LedgerConfig, LedgerError, ProfileSummary, Renderer};

/// Application service over the finance ledger.
/// This is the primary interface for any client (CLI, embedding UI, tests).
///
/// All profiles share one JSON array under a single storage key. Each
/// mutation loads the whole array, changes it, and saves the whole array;
/// nothing is cached between calls. Two ledgers pointed at the same backing
/// store (two processes on one data directory, say) can therefore race, and
/// the last save wins.
pub struct FinanceLedger<S: Storage> {
    store: S,
    config: LedgerConfig,
}

impl<S: Storage> FinanceLedger<S> {
    /// Create a ledger with the default storage key and comment placeholder.
    pub fn new(store: S) -> Self {
        Self::with_config(store, LedgerConfig::default())
    }

    pub fn with_config(store: S, config: LedgerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ========================
    // Persistence helpers
    // ========================

    /// The stored array as raw records. An absent or blank key is an empty
    /// ledger; a blob that is not a JSON array is an error.
    fn load_records(&self) -> Result<Vec<Value>, LedgerError> {
        let key = &self.config.storage_key;
        match self.store.load(key)? {
            None => Ok(Vec::new()),
            Some(text) if text.trim().is_empty() => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text).map_err(LedgerError::CorruptStore),
        }
    }

    /// Records that decode as operations, in stored order. Records that do
    /// not (e.g. an older client's `"Invalid Date"` time) are skipped.
    fn decode(&self, records: &[Value]) -> Vec<Operation> {
        records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                match serde_json::from_value::<Operation>(record.clone()) {
                    Ok(op) => Some(op),
                    Err(e) => {
                        warn!(key = %self.config.storage_key, index, error = %e, "skipping unreadable operation");
                        None
                    }
                }
            })
            .collect()
    }

    /// Strict load: fails when the blob itself is unreadable.
    fn load(&self) -> Result<Vec<Operation>, LedgerError> {
        Ok(self.decode(&self.load_records()?))
    }

    /// Fail-soft load for display reads.
    fn load_or_empty(&self) -> Vec<Operation> {
        match self.load() {
            Ok(operations) => operations,
            Err(e) => {
                warn!(key = %self.config.storage_key, error = %e, "treating unreadable ledger as empty");
                Vec::new()
            }
        }
    }

    /// Append to the stored records, writing undecodable ones back unchanged.
    fn append(&mut self, operations: &[Operation]) -> Result<(), LedgerError> {
        let mut records = self.load_records()?;
        for op in operations {
            records.push(serde_json::to_value(op).map_err(LedgerError::Serialize)?);
        }

        let text = serde_json::to_string(&records).map_err(LedgerError::Serialize)?;
        self.store.save(&self.config.storage_key, &text)?;
        debug!(key = %self.config.storage_key, count = records.len(), "saved ledger");
        Ok(())
    }

    // ========================
    // Operations
    // ========================

    /// Validate form-style input and append a new operation.
    ///
    /// `raw_amount` is the text as typed; it must parse to a finite number
    /// greater than zero. An empty `comment` becomes the configured
    /// placeholder, and a blank or unparseable `timestamp_input` becomes now.
    /// On any error the stored collection is left exactly as it was.
    pub fn add_operation(
        &mut self,
        profile: &str,
        raw_amount: &str,
        category: &str,
        comment: Option<&str>,
        timestamp_input: Option<&str>,
    ) -> Result<Operation, LedgerError> {
        let amount =
            parse_amount(raw_amount).map_err(|e| LedgerError::InvalidAmount(e.to_string()))?;

        let comment = self.config.comment_or_default(comment);

        let time = match timestamp_input.map(str::trim).filter(|t| !t.is_empty()) {
            Some(input) => parse_timestamp(input).unwrap_or_else(|| {
                debug!(input, "unparseable time, using now");
                Utc::now()
            }),
            None => Utc::now(),
        };

        let operation = Operation::new(profile, amount, category, time).with_comment(comment);

        self.append(std::slice::from_ref(&operation))?;

        info!(
            profile,
            category,
            amount = operation.amount.value(),
            "added operation"
        );
        Ok(operation)
    }

    /// Operations of `profile`, most recently added first. Never fails: a
    /// missing, unreadable or corrupt store reads as empty.
    pub fn list_operations(&self, profile: &str) -> Vec<Operation> {
        operations_for_profile(&self.load_or_empty(), profile)
    }

    /// Every operation across all profiles, in stored order. Fails soft.
    pub fn all_operations(&self) -> Vec<Operation> {
        self.load_or_empty()
    }

    /// Like [`all_operations`](Self::all_operations), but an unreadable
    /// store is an error instead of an empty ledger. Use this wherever an
    /// empty result would be mistaken for real data, such as backups.
    pub fn try_all_operations(&self) -> Result<Vec<Operation>, LedgerError> {
        self.load()
    }

    /// Profiles that have at least one operation, in order of first use.
    pub fn profiles(&self) -> Vec<String> {
        distinct_profiles(&self.load_or_empty())
    }

    pub fn summary(&self, profile: &str) -> ProfileSummary {
        summarize(profile, &self.list_operations(profile))
    }

    /// Append already-validated operations in a single read-modify-write.
    pub fn import_operations(&mut self, incoming: Vec<Operation>) -> Result<usize, LedgerError> {
        if incoming.is_empty() {
            return Ok(0);
        }
        let count = incoming.len();
        self.append(&incoming)?;
        info!(count, "imported operations");
        Ok(count)
    }

    /// Drop the whole collection. Returns how many readable operations it held.
    pub fn clear(&mut self) -> Result<usize, LedgerError> {
        let count = self.load_or_empty().len();
        self.store.remove(&self.config.storage_key)?;
        info!(count, "cleared ledger");
        Ok(count)
    }

    /// Hand the current view of `profile` to a renderer. Call after an add
    /// or whenever the active profile changes.
    pub fn refresh<R: Renderer + ?Sized>(&self, profile: &str, renderer: &mut R) {
        let operations = self.list_operations(profile);
        renderer.render(profile, &operations);
    }
}
