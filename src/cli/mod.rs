//! CLI command handlers
//!
//! Bridges clap argument parsing with the library functions.

pub mod format;
pub mod link;
pub mod report;

pub use format::{handle_format_command, FormatCommands};
pub use link::{handle_id_command, IdCommands};
pub use report::{handle_report_command, ReportCommands};
