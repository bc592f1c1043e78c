//! Account model
//!
//! Connected bank accounts and the figures the balance box shows for them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Checking or savings
    #[default]
    Depository,
    /// Credit card
    Credit,
    /// Anything else the backend reports
    #[serde(other)]
    Other,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Depository => write!(f, "Depository"),
            Self::Credit => write!(f, "Credit"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A connected bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Backend identifier
    pub id: String,

    /// Account name (e.g., "Plaid Checking")
    pub name: String,

    /// Current balance in dollars
    #[serde(rename = "currentBalance", alias = "current_balance")]
    pub current_balance: f64,

    /// Type of account
    #[serde(rename = "type", default)]
    pub account_type: AccountType,
}

impl Account {
    /// Create a new account
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        current_balance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_balance,
            account_type,
        }
    }
}

/// Totals across all connected accounts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Number of connected accounts
    pub total_banks: usize,
    /// Sum of current balances
    pub total_current_balance: f64,
}

impl AccountSummary {
    /// Summarise a list of accounts
    pub fn from_accounts(accounts: &[Account]) -> Self {
        Self {
            total_banks: accounts.len(),
            total_current_balance: accounts.iter().map(|a| a.current_balance).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let accounts = vec![
            Account::new("a1", "Plaid Checking", AccountType::Depository, 110.0),
            Account::new("a2", "Plaid Saving", AccountType::Depository, 210.5),
            Account::new("a3", "Plaid Credit Card", AccountType::Credit, -410.25),
        ];

        let summary = AccountSummary::from_accounts(&accounts);
        assert_eq!(summary.total_banks, 3);
        assert!((summary.total_current_balance - (-89.75)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = AccountSummary::from_accounts(&[]);
        assert_eq!(summary.total_banks, 0);
        assert_eq!(summary.total_current_balance, 0.0);
    }

    #[test]
    fn test_account_deserialize() {
        let json = r#"[
            {"id": "1", "name": "Checking", "currentBalance": 12.5, "type": "depository"},
            {"id": "2", "name": "Card", "current_balance": -3.0, "type": "credit"},
            {"id": "3", "name": "Brokerage", "currentBalance": 900.0, "type": "investment"},
            {"id": "4", "name": "Untyped", "currentBalance": 1.0}
        ]"#;
        let accounts: Vec<Account> = serde_json::from_str(json).unwrap();

        assert_eq!(accounts[0].account_type, AccountType::Depository);
        assert_eq!(accounts[1].account_type, AccountType::Credit);
        assert_eq!(accounts[1].current_balance, -3.0);
        assert_eq!(accounts[2].account_type, AccountType::Other);
        assert_eq!(accounts[3].account_type, AccountType::Depository);
    }
}
