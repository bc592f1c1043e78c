//! JSON readers

use std::io::Read;

use super::validate_records;
use crate::error::HorizonResult;
use crate::models::{Account, Transaction, TransactionRecord};

/// Read a JSON array of transaction records
pub fn read_transactions_json<R: Read>(reader: R) -> HorizonResult<Vec<Transaction>> {
    let records: Option<Vec<TransactionRecord>> = serde_json::from_reader(reader)?;
    validate_records(records.unwrap_or_default().into_iter().map(Ok))
}

/// Read a JSON array of accounts
pub fn read_accounts_json<R: Read>(reader: R) -> HorizonResult<Vec<Account>> {
    let accounts: Option<Vec<Account>> = serde_json::from_reader(reader)?;
    Ok(accounts.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HorizonError;
    use crate::models::MISSING_CATEGORY;

    #[test]
    fn test_read_transactions() {
        let json = r#"[
            {"name": "Uber 063015 SF**POOL**", "category": "Travel", "date": "2024-02-10T09:00:00Z", "amount": 5.4},
            {"name": "United Airlines", "date": "2024-02-09", "amount": -500}
        ]"#;
        let txns = read_transactions_json(json.as_bytes()).unwrap();

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].name, "Uber 063015 SF**POOL**");
        assert_eq!(txns[1].category, MISSING_CATEGORY);
        assert_eq!(txns[1].amount, -500.0);
    }

    #[test]
    fn test_null_and_empty_documents() {
        assert!(read_transactions_json("null".as_bytes()).unwrap().is_empty());
        assert!(read_transactions_json("[]".as_bytes()).unwrap().is_empty());
        assert!(read_accounts_json("null".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = read_transactions_json("[{".as_bytes()).unwrap_err();
        assert!(matches!(err, HorizonError::Json(_)));

        let err =
            read_transactions_json(r#"[{"category": "A", "amount": 1}]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, HorizonError::Json(_)));
    }

    #[test]
    fn test_invalid_date_reports_row() {
        let json = r#"[
            {"category": "A", "date": "2024-01-01", "amount": 1},
            {"category": "A", "date": "Invalid Date", "amount": 1}
        ]"#;
        let err = read_transactions_json(json.as_bytes()).unwrap_err();
        assert!(err.is_invalid_date());
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_read_accounts() {
        let json = r#"[{"id": "1", "name": "Checking", "currentBalance": 100.25, "type": "depository"}]"#;
        let accounts = read_accounts_json(json.as_bytes()).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].current_balance, 100.25);
    }
}
