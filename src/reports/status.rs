//! Processing vs. settled status
//!
//! A transaction is "Processing" while its date is within the last two days
//! and "Success" afterwards. The two days are whole 48-hour periods
//! subtracted from the current instant, not calendar days.

use chrono::{DateTime, Duration, Utc};

use crate::clock::Clock;
use crate::models::TransactionStatus;

/// Days a transaction is reported as processing
pub const PROCESSING_WINDOW_DAYS: i64 = 2;

/// Status of a transaction dated `date`, using the default two-day window
pub fn transaction_status<C: Clock + ?Sized>(date: DateTime<Utc>, clock: &C) -> TransactionStatus {
    classify_status(date, clock.now(), PROCESSING_WINDOW_DAYS)
}

/// Status of a transaction dated `date`, with a custom window
pub fn transaction_status_with_window<C: Clock + ?Sized>(
    date: DateTime<Utc>,
    clock: &C,
    window_days: i64,
) -> TransactionStatus {
    classify_status(date, clock.now(), window_days)
}

/// Status of `date` as seen at `now`
///
/// `Processing` when `date` is strictly after `now - window_days`. When that
/// threshold falls outside chrono's range, every date is on one side of it.
pub fn classify_status(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    window_days: i64,
) -> TransactionStatus {
    let threshold = Duration::try_days(window_days).and_then(|w| now.checked_sub_signed(w));
    let processing = match threshold {
        Some(threshold) => date > threshold,
        None => window_days > 0,
    };
    if processing {
        TransactionStatus::Processing
    } else {
        TransactionStatus::Success
    }
}
