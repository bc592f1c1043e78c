//! CSV reader
//!
//! Columns are matched by header name, so order does not matter and extra
//! columns are ignored.

use ::csv::{ReaderBuilder, Trim};
use std::io::Read;

use super::validate_records;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{Transaction, TransactionRecord};

/// Read transactions from CSV with a header row
pub fn read_transactions_csv<R: Read>(reader: R) -> HorizonResult<Vec<Transaction>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let records = reader
        .deserialize::<TransactionRecord>()
        .map(|result| result.map_err(HorizonError::from));

    validate_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MISSING_CATEGORY;

    #[test]
    fn test_read_csv() {
        let data = "\
name,category,date,amount
Starbucks,Food and Drink,2024-03-01,4.33
McDonald's,Food and Drink,2024-03-02 12:30:00,12.00
Payroll,,2024-03-03,-2500
";
        let txns = read_transactions_csv(data.as_bytes()).unwrap();

        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].name, "Starbucks");
        assert_eq!(txns[1].category, "Food and Drink");
        assert_eq!(txns[2].category, MISSING_CATEGORY);
        assert_eq!(txns[2].amount, -2500.0);
    }

    #[test]
    fn test_column_order_and_missing_name() {
        let data = "amount,date,category\n1.5,2024-03-01,Travel\n";
        let txns = read_transactions_csv(data.as_bytes()).unwrap();

        assert_eq!(txns[0].category, "Travel");
        assert!(txns[0].name.is_empty());
    }

    #[test]
    fn test_bad_amount() {
        let data = "category,date,amount\nTravel,2024-03-01,lots\n";
        let err = read_transactions_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, HorizonError::Csv(_)));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_nan_amount_rejected() {
        let data = "category,date,amount\nTravel,2024-03-01,NaN\n";
        let err = read_transactions_csv(data.as_bytes()).unwrap_err();
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_header_only() {
        let txns = read_transactions_csv("category,date,amount\n".as_bytes()).unwrap();
        assert!(txns.is_empty());
    }
}
