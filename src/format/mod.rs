//! Presentation formatting
//!
//! Pure functions that turn amounts and instants into the strings the
//! dashboard shows, plus the small text helpers that go with them.

pub mod currency;
pub mod datetime;
pub mod text;

pub use currency::format_amount;
pub use datetime::{format_date_time, format_date_time_str, parse_date, FormattedDateViews};
pub use text::remove_special_characters;
