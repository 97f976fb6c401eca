use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{parse_timestamp, Amount};

/// The category that marks an operation as a credit. Every other category is a debit.
pub const INCOME_CATEGORY: &str = "income";

/// Comment stored when the user leaves the field blank.
pub const DEFAULT_COMMENT: &str = "No purpose";

/// A single recorded financial operation under a named profile.
/// Operations are immutable once appended and carry no identity of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Which ledger the entry belongs to (e.g. "personal", "business")
    pub profile: String,
    pub amount: Amount,
    /// Free-form; only "income" is special
    pub category: String,
    pub comment: String,
    /// When the operation happened, stored as RFC 3339
    #[serde(deserialize_with = "deserialize_time")]
    pub time: DateTime<Utc>,
}

impl Operation {
    pub fn new(
        profile: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            profile: profile.into(),
            amount,
            category: category.into(),
            comment: DEFAULT_COMMENT.to_string(),
            time,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Returns true for credits (income), false for debits
    pub fn is_income(&self) -> bool {
        self.category == INCOME_CATEGORY
    }

    /// Amount with the sign implied by the category
    pub fn signed_amount(&self) -> f64 {
        if self.is_income() {
            self.amount.value()
        } else {
            -self.amount.value()
        }
    }
}

fn deserialize_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized time '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_amount;

    fn sample(category: &str) -> Operation {
        Operation::new(
            "personal",
            parse_amount("100").unwrap(),
            category,
            parse_timestamp("2024-01-15T10:30:00Z").unwrap(),
        )
    }

    #[test]
    fn test_create_operation() {
        let op = sample("food").with_comment("Lunch");
        assert_eq!(op.profile, "personal");
        assert_eq!(op.amount.value(), 100.0);
        assert_eq!(op.comment, "Lunch");
        assert!(!op.is_income());
        assert_eq!(op.signed_amount(), -100.0);
    }

    #[test]
    fn test_default_comment() {
        assert_eq!(sample("food").comment, DEFAULT_COMMENT);
    }

    #[test]
    fn test_income_is_credit() {
        let op = sample("income");
        assert!(op.is_income());
        assert_eq!(op.signed_amount(), 100.0);
        // Case-sensitive, like the category select values
        assert!(!sample("Income").is_income());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample("food")).unwrap();
        assert_eq!(json["profile"], "personal");
        assert_eq!(json["amount"], 100.0);
        assert_eq!(json["category"], "food");
        assert_eq!(json["comment"], DEFAULT_COMMENT);
        assert!(json["time"].as_str().unwrap().starts_with("2024-01-15T10:30:00"));
    }

    #[test]
    fn test_reads_legacy_display_time() {
        let json = r#"{"profile":"p","amount":12.5,"category":"income","comment":"Salary","time":"15.01.2024, 10:30:00"}"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(op.time, parse_timestamp("2024-01-15T10:30:00Z").unwrap());
        assert_eq!(op.amount.value(), 12.5);
    }

    #[test]
    fn test_rejects_invalid_record() {
        let bad_amount = r#"{"profile":"p","amount":-1,"category":"x","comment":"c","time":"2024-01-15"}"#;
        assert!(serde_json::from_str::<Operation>(bad_amount).is_err());
        let bad_time = r#"{"profile":"p","amount":1,"category":"x","comment":"c","time":"soon"}"#;
        assert!(serde_json::from_str::<Operation>(bad_time).is_err());
    }
}
