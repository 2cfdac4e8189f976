//! In-memory sales ledger
//!
//! Volatile process-wide storage: empty at startup, lost on shutdown. Records
//! are append-only and immutable; the only mutation after insert is deletion.
//! The ledger is an owned value injected into whoever needs it, never ambient
//! global state.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SalesError};

/// A single recorded sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Creation timestamp in milliseconds, bumped when needed so ids stay
    /// unique and strictly increasing for the process lifetime
    pub id: i64,
    /// Creation date, `YYYY-MM-DD` (UTC)
    pub date: String,
    /// Self-declared owner identity; matched case-insensitively
    pub email: String,
    /// Purchase cost
    pub cost: f64,
    /// Sell price
    pub sell: f64,
    /// Profit on the sale
    pub profit: f64,
}

/// Append/delete store of sale records, insertion-ordered.
#[derive(Debug, Default)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
}

impl SalesLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order
    pub fn all(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Records owned by `email` under case-insensitive comparison, insertion
    /// order preserved.
    ///
    /// Identities are compared lower-cased at query time; nothing is
    /// normalized in storage.
    pub fn by_owner(&self, email: &str) -> Result<Vec<SaleRecord>> {
        if email.is_empty() {
            return Err(SalesError::MissingIdentity);
        }

        let needle = email.to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|r| r.email.to_lowercase() == needle)
            .cloned()
            .collect())
    }

    /// Append a new record stamped with the current UTC time and return it.
    ///
    /// Amounts are stored as given; a NaN produced by request coercion is
    /// kept as-is.
    pub fn add(&mut self, email: &str, cost: f64, sell: f64, profit: f64) -> SaleRecord {
        let now = Utc::now();

        // Same-millisecond inserts would collide; bump past the newest id.
        let mut id = now.timestamp_millis();
        if let Some(last) = self.records.last() {
            if id <= last.id {
                id = last.id + 1;
            }
        }

        let record = SaleRecord {
            id,
            date: now.format("%Y-%m-%d").to_string(),
            email: email.to_string(),
            cost,
            sell,
            profit,
        };
        self.records.push(record.clone());
        record
    }

    /// Delete every record with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: i64) {
        self.records.retain(|r| r.id != id);
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sell prices in transaction order.
pub fn sell_series(records: &[SaleRecord]) -> Vec<f64> {
    records.iter().map(|r| r.sell).collect()
}

/// Profits in transaction order.
pub fn profit_series(records: &[SaleRecord]) -> Vec<f64> {
    records.iter().map(|r| r.profit).collect()
}
