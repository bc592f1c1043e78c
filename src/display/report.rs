//! Category and transaction tables

use chrono::FixedOffset;
use tabled::{settings::Style, Table, Tabled};

use crate::clock::Clock;
use crate::error::HorizonResult;
use crate::format::{format_amount, format_date_time};
use crate::models::Transaction;
use crate::reports::{classify_status, CategoryCount};

/// Label shown for the placeholder category
const UNCATEGORIZED_LABEL: &str = "(uncategorized)";

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Transaction")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
}

fn category_label(name: &str) -> String {
    if name.is_empty() {
        UNCATEGORIZED_LABEL.to_string()
    } else {
        name.to_string()
    }
}

/// Format category counts as a table, with a total line underneath
pub fn format_category_table(counts: &[CategoryCount]) -> String {
    let Some(first) = counts.first() else {
        return "No transactions found.".to_string();
    };

    let rows: Vec<CategoryRow> = counts
        .iter()
        .map(|c| CategoryRow {
            name: category_label(&c.name),
            count: c.count,
            share: format!("{:.1}%", c.share() * 100.0),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\n{} transactions in {} categories\n",
        first.total_count,
        counts.len()
    ));
    output
}

/// Format transactions as a table, rendering dates in `offset`
pub fn format_transaction_table(
    transactions: &[Transaction],
    clock: &impl Clock,
    window_days: i64,
    offset: &FixedOffset,
) -> HorizonResult<String> {
    if transactions.is_empty() {
        return Ok("No transactions found.".to_string());
    }

    // One instant for every row
    let now = clock.now();
    let mut rows = Vec::with_capacity(transactions.len());
    for txn in transactions {
        rows.push(TransactionRow {
            name: txn.name.clone(),
            amount: format_amount(txn.amount)?,
            status: classify_status(txn.date, now, window_days).to_string(),
            date: format_date_time(&txn.date.with_timezone(offset)).date_time,
            category: category_label(&txn.category),
        });
    }

    Ok(Table::new(rows).with(Style::rounded()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::reports::count_transaction_categories;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_category_table(&[]), "No transactions found.");

        let clock = FixedClock::new(Utc::now());
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            format_transaction_table(&[], &clock, 2, &utc).unwrap(),
            "No transactions found."
        );
    }

    #[test]
    fn test_category_table() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let txns = vec![
            Transaction::new("Travel", date, 1.0),
            Transaction::new("Travel", date, 1.0),
            Transaction::new("", date, 1.0),
            Transaction::new("Food", date, 1.0),
        ];
        let output = format_category_table(&count_transaction_categories(&txns));

        assert!(output.contains("Travel"));
        assert!(output.contains("50.0%"));
        assert!(output.contains("(uncategorized)"));
        assert!(output.contains("4 transactions in 3 categories"));
    }

    #[test]
    fn test_transaction_table() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let clock = FixedClock::new(now);
        let utc = FixedOffset::east_opt(0).unwrap();
        let txns = vec![
            Transaction::new("Travel", now - Duration::hours(2), -1234.5).with_name("Uber"),
            Transaction::new("Food", now - Duration::days(4), 8.0).with_name("Cafe"),
        ];

        let output = format_transaction_table(&txns, &clock, 2, &utc).unwrap();
        assert!(output.contains("-$1,234.50"));
        assert!(output.contains("Processing"));
        assert!(output.contains("Success"));
        assert!(output.contains("Sun, Mar 10, 10:00 AM"));
    }
}
