//! Reports derived from transaction lists
//!
//! - Category frequency (most common categories first)
//! - Processing / settled status

pub mod categories;
pub mod status;

pub use categories::{count_transaction_categories, CategoryCount};
pub use status::{
    classify_status, transaction_status, transaction_status_with_window, PROCESSING_WINDOW_DAYS,
};
