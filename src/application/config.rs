use crate::domain::DEFAULT_COMMENT;
use crate::storage::DEFAULT_STORAGE_KEY;

/// Per-ledger settings. The ledger holds nothing else between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Storage key holding the JSON array of operations
    pub storage_key: String,
    /// Comment stored when none is supplied
    pub default_comment: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_comment: DEFAULT_COMMENT.to_string(),
        }
    }
}

impl LedgerConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_default_comment(mut self, comment: impl Into<String>) -> Self {
        self.default_comment = comment.into();
        self
    }

    /// The comment as typed, or the placeholder when it is missing or empty.
    /// Non-empty text is kept verbatim, surrounding whitespace included.
    pub fn comment_or_default(&self, comment: Option<&str>) -> String {
        match comment {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => self.default_comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_or_default() {
        let config = LedgerConfig::default();
        assert_eq!(config.comment_or_default(None), DEFAULT_COMMENT);
        assert_eq!(config.comment_or_default(Some("")), DEFAULT_COMMENT);
        assert_eq!(config.comment_or_default(Some("  Lunch  ")), "  Lunch  ");
        assert_eq!(config.comment_or_default(Some(" ")), " ");
    }
}
