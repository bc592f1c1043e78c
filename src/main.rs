use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use horizon::cli::{
    handle_format_command, handle_id_command, handle_report_command, FormatCommands, IdCommands,
    ReportCommands,
};
use horizon::config::{paths::HorizonPaths, settings::Settings};
use horizon::query::form_url_query;

#[derive(Parser)]
#[command(
    name = "horizon",
    version,
    about = "Banking dashboard figures from the command line",
    long_about = "Horizon formats amounts and dates the way the dashboard shows them, \
                  counts transactions per category, classifies transaction status, \
                  and summarises account balances."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format amounts, dates and statuses
    #[command(subcommand, alias = "fmt")]
    Format(FormatCommands),

    /// Reports over transaction and account files
    #[command(subcommand)]
    Report(ReportCommands),

    /// Encode, decode and extract ids
    #[command(subcommand)]
    Id(IdCommands),

    /// Set one query parameter and print the resulting link
    Query {
        /// Path of the page (e.g., "/transaction-history")
        pathname: String,
        /// Parameter name
        key: String,
        /// Parameter value
        value: String,
        /// Existing query string
        #[arg(short, long, default_value = "")]
        params: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HORIZON_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = HorizonPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Format(cmd)) => handle_format_command(&settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&settings, cmd)?,
        Some(Commands::Id(cmd)) => handle_id_command(cmd)?,
        Some(Commands::Query {
            pathname,
            key,
            value,
            params,
        }) => {
            println!("{}", form_url_query(&pathname, &params, &key, &value));
        }
        Some(Commands::Config) => {
            println!("Horizon Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  UTC offset (minutes):    {}", settings.utc_offset_minutes);
            println!("  Processing window (days): {}", settings.processing_window_days);
        }
        None => {
            println!("Horizon - banking dashboard figures");
            println!();
            println!("Run 'horizon --help' for usage information.");
        }
    }

    Ok(())
}
