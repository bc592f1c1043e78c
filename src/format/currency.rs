//! US dollar currency formatting

use crate::error::HorizonResult;
use crate::models::Money;

/// Format an amount as US currency: `$1,234.50`, `-$5.01`, `$0.00`
///
/// # Errors
///
/// `InvalidAmount` when `amount` is NaN or infinite, or too large to hold
/// in cents.
pub fn format_amount(amount: f64) -> HorizonResult<String> {
    Ok(Money::from_f64(amount)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5).unwrap(), "$1,234.50");
        assert_eq!(format_amount(0.0).unwrap(), "$0.00");
        assert_eq!(format_amount(12.0).unwrap(), "$12.00");
        assert_eq!(format_amount(1_000_000.0).unwrap(), "$1,000,000.00");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_amount(-5.005).unwrap(), "-$5.01");
        assert_eq!(format_amount(-1234.5).unwrap(), "-$1,234.50");
    }

    #[test]
    fn test_format_rejects_non_finite() {
        assert!(format_amount(f64::NAN).unwrap_err().is_invalid_amount());
        assert!(format_amount(f64::INFINITY).unwrap_err().is_invalid_amount());
    }
}
