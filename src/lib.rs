//! Horizon - transaction aggregation and presentation formatting
//!
//! This library derives the figures a banking dashboard shows from plain
//! account and transaction data. Every function is pure apart from reading
//! the clock, and the clock is injected.
//!
//! # Architecture
//!
//! - `format`: currency, date/time and text formatting
//! - `reports`: category frequency counts and processing/success status
//! - `models`: transactions, accounts, money
//! - `clock`: injectable source of "now"
//! - `ids`, `query`: link helpers (id encoding, query strings)
//! - `validation`: sign-in / sign-up form rules
//! - `import`: JSON and CSV loaders
//! - `config`, `display`, `cli`: the `horizon` command-line front-end
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use horizon::format::format_amount;
//! use horizon::models::Transaction;
//! use horizon::reports::count_transaction_categories;
//!
//! let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let txns = vec![
//!     Transaction::new("Travel", date, 12.0),
//!     Transaction::new("Food", date, 4.5),
//!     Transaction::new("Travel", date, 30.0),
//! ];
//! let counts = count_transaction_categories(&txns);
//! assert_eq!(counts[0].name, "Travel");
//! assert_eq!(format_amount(1234.5).unwrap(), "$1,234.50");
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod ids;
pub mod import;
pub mod models;
pub mod query;
pub mod reports;
pub mod validation;

pub use error::{HorizonError, HorizonResult};
