use chrono::Local;

/// Timestamp layout used for every transaction, e.g. `16-10-2026 14:05`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// A single recorded expense. Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    amount: f64,
    category: String,
    timestamp: String,
}

impl Transaction {
    /// Build a transaction stamped with the current local time.
    ///
    /// No validation happens here; callers check the amount and category first.
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self::with_timestamp(amount, category, Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn with_timestamp(
        amount: f64,
        category: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
