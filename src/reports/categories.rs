//! Category frequency report
//!
//! Counts how many transactions fall into each category. This feeds the
//! "Top categories" panel, which shows each category's share of all
//! transactions.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::Transaction;

/// Number of transactions in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Category name
    pub name: String,
    /// Transactions in this category
    pub count: usize,
    /// Transactions across all categories
    pub total_count: usize,
}

impl CategoryCount {
    /// Fraction of all transactions that fall in this category
    pub fn share(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.count as f64 / self.total_count as f64
        }
    }
}

/// Count transactions per category, most frequent first
///
/// Categories match on exact, case-sensitive names. Categories with equal
/// counts keep the order in which they first appear in `transactions`.
/// Every transaction is counted, including uncategorized ones.
pub fn count_transaction_categories<'a, I>(transactions: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    // Position in `counts` for each category, so first-seen order survives
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut total_count = 0;

    for txn in transactions {
        let category = txn.category.as_str();
        match index.get(category) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(category, counts.len());
                counts.push((category, 1));
            }
        }
        total_count += 1;
    }

    tracing::debug!(
        transactions = total_count,
        categories = counts.len(),
        "aggregated transaction categories"
    );

    let mut aggregated: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
            total_count,
        })
        .collect();

    // sort_by is stable: ties stay in first-seen order
    aggregated.sort_by(|a, b| b.count.cmp(&a.count));

    aggregated
}
