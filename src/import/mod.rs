//! Loading transactions and accounts from files
//!
//! - JSON: an array of records (a `null` document counts as empty)
//! - CSV: header row with `category,date,amount` and an optional `name`
//!
//! Records are validated into [`Transaction`]s as they are read; the first
//! bad record stops the load.

pub mod csv;
pub mod json;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{HorizonError, HorizonResult};
use crate::models::{Account, Transaction, TransactionRecord};

pub use self::csv::read_transactions_csv;
pub use self::json::{read_accounts_json, read_transactions_json};

/// Load transactions, choosing the format from the file extension
pub fn load_transactions(path: &Path) -> HorizonResult<Vec<Transaction>> {
    let reader = open(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let transactions = if is_csv {
        read_transactions_csv(reader)?
    } else {
        read_transactions_json(reader)?
    };

    tracing::debug!(
        path = %path.display(),
        count = transactions.len(),
        "loaded transactions"
    );
    Ok(transactions)
}

/// Load accounts from a JSON file
pub fn load_accounts(path: &Path) -> HorizonResult<Vec<Account>> {
    let accounts = read_accounts_json(open(path)?)?;
    tracing::debug!(path = %path.display(), count = accounts.len(), "loaded accounts");
    Ok(accounts)
}

fn open(path: &Path) -> HorizonResult<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| HorizonError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Validate records in order, tagging a failure with its 1-based row
fn validate_records<I>(records: I) -> HorizonResult<Vec<Transaction>>
where
    I: IntoIterator<Item = HorizonResult<TransactionRecord>>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            record
                .and_then(Transaction::try_from)
                .map_err(|e| at_row(e, idx + 1))
        })
        .collect()
}

fn at_row(err: HorizonError, row: usize) -> HorizonError {
    match err {
        HorizonError::InvalidAmount(msg) => {
            HorizonError::InvalidAmount(format!("row {}: {}", row, msg))
        }
        HorizonError::InvalidDate(msg) => {
            HorizonError::InvalidDate(format!("row {}: {}", row, msg))
        }
        HorizonError::Json(msg) => HorizonError::Json(format!("row {}: {}", row, msg)),
        HorizonError::Csv(msg) => HorizonError::Csv(format!("row {}: {}", row, msg)),
        other => other,
    }
}
