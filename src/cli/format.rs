//! CLI commands for one-off formatting

use chrono::FixedOffset;
use clap::Subcommand;

use crate::clock::SystemClock;
use crate::config::Settings;
use crate::error::HorizonResult;
use crate::format::{format_amount, format_date_time_str, parse_date};
use crate::reports::transaction_status_with_window;

/// Formatting subcommands
#[derive(Subcommand, Debug)]
pub enum FormatCommands {
    /// Format an amount as US currency
    Amount {
        /// Amount in dollars (e.g., 1234.5 or -5.005)
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Show the four date views for a timestamp
    Date {
        /// RFC 3339 timestamp, "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD"
        value: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a transaction date as Processing or Success
    Status {
        /// Transaction date
        date: String,

        /// Processing window in days (defaults to the configured value)
        #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..))]
        window: Option<i64>,
    },
}

/// Handle formatting commands
pub fn handle_format_command(settings: &Settings, cmd: FormatCommands) -> HorizonResult<()> {
    match cmd {
        FormatCommands::Amount { value } => {
            println!("{}", format_amount(value)?);
        }
        FormatCommands::Date { value, json } => {
            let offset: FixedOffset = settings.display_offset()?;
            let views = format_date_time_str(&value, &offset)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                println!("Date & time: {}", views.date_time);
                println!("Day:         {}", views.date_day);
                println!("Date:        {}", views.date_only);
                println!("Time:        {}", views.time_only);
            }
        }
        FormatCommands::Status { date, window } => {
            let date = parse_date(&date)?;
            let window = window.unwrap_or(settings.processing_window_days);
            println!(
                "{}",
                transaction_status_with_window(date, &SystemClock, window)
            );
        }
    }
    Ok(())
}
