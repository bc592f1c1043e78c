//! Money type for representing currency amounts
//!
//! Amounts arrive from the presentation layer as `f64`. They are rounded to
//! whole cents once, on the way in, and everything after that works on an
//! `i64` cent count.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HorizonError, HorizonResult};

/// Largest whole-dollar magnitude whose cent count still fits in an `i64`
const MAX_DOLLARS: f64 = 92_233_720_368_547_758.0;

/// A monetary amount stored as cents (hundredths of a US dollar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use horizon::models::Money;
    /// let amount = Money::from_cents(123450);
    /// assert_eq!(amount.to_string(), "$1,234.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Round a floating point dollar amount to the nearest cent
    ///
    /// Rounding is half away from zero, applied to the shortest decimal
    /// representation of `amount`, so `1.005` becomes `$1.01` even though
    /// the nearest double is slightly below 1.005.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for NaN, infinities, and magnitudes whose cent count
    /// does not fit in an `i64`.
    pub fn from_f64(amount: f64) -> HorizonResult<Self> {
        if !amount.is_finite() {
            return Err(HorizonError::invalid_amount(amount));
        }
        if amount.abs() >= MAX_DOLLARS {
            return Err(HorizonError::InvalidAmount(format!(
                "{} is too large to represent in cents",
                amount
            )));
        }

        // Display for f64 prints the shortest round-trip form without an exponent
        let repr = amount.abs().to_string();
        let (whole, frac) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

        let dollars: i64 = whole
            .parse()
            .map_err(|_| HorizonError::InvalidAmount(repr.clone()))?;

        let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().is_some_and(|d| d >= 5);

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(|| {
                HorizonError::InvalidAmount(format!(
                    "{} is too large to represent in cents",
                    amount
                ))
            })?;

        Ok(Self(if amount.is_sign_negative() { -cents } else { cents }))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            group_thousands(self.dollars().unsigned_abs()),
            self.cents_part()
        )
    }
}

/// Render an integer with comma thousands separators ("1234567" -> "1,234,567")
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
