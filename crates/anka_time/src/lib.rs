//! Calendar-date primitives shared by the dasha and numerology crates.
//!
//! This crate provides:
//! - Strict parsing of `YYYY-MM-DD` and `DD/MM/YYYY` date strings
//! - `DD/MM/YYYY` display formatting, with an em-dash for empty cells
//! - Whole-day differences and day offsets
//! - Calendar-year arithmetic with 29 February rolling over to 1 March

pub mod civil;
pub mod error;

pub use chrono::NaiveDate;
pub use civil::{
    EMPTY_CELL, add_days, add_years, ddmmyyyy_digits, format_cell, format_ddmmyyyy, parse_date,
    whole_days_between,
};
pub use error::DateError;
