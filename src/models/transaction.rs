//! Transaction model
//!
//! [`TransactionRecord`] is the loosely typed shape that arrives from a
//! banking backend export. It is validated once into a [`Transaction`], which
//! is what the rest of the crate works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::clock::Clock;
use crate::error::{HorizonError, HorizonResult};
use crate::format::datetime::parse_date;
use crate::reports::status::transaction_status;

/// Category key for transactions that arrive without one
pub const MISSING_CATEGORY: &str = "";

/// Coarse settlement status shown next to a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Posted recently, may still change
    Processing,
    /// Settled
    Success,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Success => write!(f, "Success"),
        }
    }
}

/// A validated financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Merchant or description, display only
    #[serde(default)]
    pub name: String,

    /// Category label, compared case-sensitively
    pub category: String,

    /// When the transaction was posted
    pub date: DateTime<Utc>,

    /// Amount in dollars
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(category: impl Into<String>, date: DateTime<Utc>, amount: f64) -> Self {
        Self {
            name: String::new(),
            category: category.into(),
            date,
            amount,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Check if this transaction was recorded without a category
    pub fn is_uncategorized(&self) -> bool {
        self.category == MISSING_CATEGORY
    }

    /// Status relative to the clock's current instant
    pub fn status(&self, clock: &impl Clock) -> TransactionStatus {
        transaction_status(self.date, clock)
    }
}

/// A transaction as read from an external file, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub date: String,
    pub amount: f64,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = HorizonError;

    fn try_from(record: TransactionRecord) -> HorizonResult<Self> {
        if !record.amount.is_finite() {
            return Err(HorizonError::invalid_amount(record.amount));
        }
        let date = parse_date(&record.date)?;

        Ok(Self {
            name: record.name.unwrap_or_default(),
            category: record
                .category
                .unwrap_or_else(|| MISSING_CATEGORY.to_string()),
            date,
            amount: record.amount,
        })
    }
}
