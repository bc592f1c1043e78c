//! Core data models for Horizon
//!
//! Plain data handed over by the banking backend: accounts, transactions,
//! and the money type used when rendering amounts.

pub mod account;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountSummary, AccountType};
pub use money::Money;
pub use transaction::{Transaction, TransactionRecord, TransactionStatus, MISSING_CATEGORY};
