//! Civil calendar helpers over `chrono::NaiveDate`.
//!
//! All dasha arithmetic is done in whole days between plain calendar dates;
//! there is no time of day and no timezone.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::DateError;

/// Cell text shown in place of a date for placeholder rows.
pub const EMPTY_CELL: &str = "\u{2014}";

/// Parse a calendar date given as `YYYY-MM-DD` or `DD/MM/YYYY`.
///
/// Anything else, including impossible dates such as `31/02/2001`, is
/// rejected rather than coerced.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let s = input.trim();
    let fmt = if s.contains('-') {
        "%Y-%m-%d"
    } else if s.contains('/') {
        "%d/%m/%Y"
    } else {
        return Err(DateError::Malformed(input.to_string()));
    };
    NaiveDate::parse_from_str(s, fmt).map_err(|_| DateError::Malformed(input.to_string()))
}

/// Format as `DD/MM/YYYY` with zero-padded day and month.
pub fn format_ddmmyyyy(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Format an optional date, using [`EMPTY_CELL`] for `None`.
pub fn format_cell(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format_ddmmyyyy(d),
        None => EMPTY_CELL.to_string(),
    }
}

/// Signed number of whole days from `start` to `end`.
pub fn whole_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Shift a date by a signed number of days.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, DateError> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or(DateError::OutOfRange)
}

/// Shift a date by whole calendar years, keeping day and month.
///
/// 29 February landing in a non-leap year becomes 1 March, matching the
/// overflow rule of the date handling the row tables were first produced with.
pub fn add_years(date: NaiveDate, years: i32) -> Result<NaiveDate, DateError> {
    let year = date.year().checked_add(years).ok_or(DateError::OutOfRange)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| {
            if date.month() == 2 && date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 3, 1)
            } else {
                None
            }
        })
        .ok_or(DateError::OutOfRange)
}

/// Decimal digits of the `DDMMYYYY` rendering of a date.
///
/// Years are rendered with at least four digits; a negative year contributes
/// only its magnitude.
pub fn ddmmyyyy_digits(date: NaiveDate) -> Vec<u8> {
    let text = format!(
        "{:02}{:02}{:04}",
        date.day(),
        date.month(),
        date.year().unsigned_abs()
    );
    text.bytes().map(|b| b - b'0').collect()
}
