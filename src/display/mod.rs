//! Display formatting for terminal output
//!
//! Renders reports and accounts as tables for the CLI.

pub mod account;
pub mod report;

pub use account::format_account_summary;
pub use report::{format_category_table, format_transaction_table};
