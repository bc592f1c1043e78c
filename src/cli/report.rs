//! CLI commands for reports
//!
//! Reads transaction or account files and prints the dashboard figures.

use clap::Subcommand;
use std::path::PathBuf;

use crate::clock::SystemClock;
use crate::config::Settings;
use crate::display::{format_account_summary, format_category_table, format_transaction_table};
use crate::error::HorizonResult;
use crate::import::{load_accounts, load_transactions};
use crate::reports::count_transaction_categories;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Count transactions per category, most frequent first
    #[command(alias = "top-categories")]
    Categories {
        /// JSON or CSV transaction file
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List transactions with amount, status and date
    Transactions {
        /// JSON or CSV transaction file
        file: PathBuf,

        /// Show only the first N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show connected accounts and the total balance
    Summary {
        /// JSON account file
        file: PathBuf,
    },
}

/// Handle report commands
pub fn handle_report_command(settings: &Settings, cmd: ReportCommands) -> HorizonResult<()> {
    match cmd {
        ReportCommands::Categories { file, json } => {
            let transactions = load_transactions(&file)?;
            let counts = count_transaction_categories(&transactions);
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                print!("{}", format_category_table(&counts));
            }
        }
        ReportCommands::Transactions { file, limit } => {
            let mut transactions = load_transactions(&file)?;
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }
            let table = format_transaction_table(
                &transactions,
                &SystemClock,
                settings.processing_window_days,
                &settings.display_offset()?,
            )?;
            println!("{}", table);
        }
        ReportCommands::Summary { file } => {
            let accounts = load_accounts(&file)?;
            print!("{}", format_account_summary(&accounts)?);
        }
    }
    Ok(())
}
