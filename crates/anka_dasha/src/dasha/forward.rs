//! Forward Antar Dasha generation from a birth date and age offset.

use anka_time::{DateError, NaiveDate, add_years};

use crate::error::DashaError;

use super::sequence::rotate;
use super::subperiod::partition;
use super::types::{DashaLevel, DashaRow, DateInterval, MAHA_SPAN_YEARS};

/// The nine-year Maha Dasha interval ending `age_offset_years` after birth.
///
/// The start is `birth + (age − 9)` calendar years and the end is nine
/// calendar years after that. The span is then measured in whole days.
pub fn maha_interval(birth: NaiveDate, age_offset_years: i32) -> Result<DateInterval, DashaError> {
    let offset = age_offset_years
        .checked_sub(MAHA_SPAN_YEARS)
        .ok_or(DateError::OutOfRange)?;
    let start = add_years(birth, offset)?;
    let end = add_years(start, MAHA_SPAN_YEARS)?;
    Ok(DateInterval::new(start, end))
}

/// Antar Dasha rows of the Maha Dasha ending at `age_offset_years`.
pub fn forward(
    birth: NaiveDate,
    age_offset_years: i32,
    start_period_id: u8,
) -> Result<Vec<DashaRow>, DashaError> {
    let sequence = rotate(start_period_id)?;
    let interval = maha_interval(birth, age_offset_years)?;
    partition(interval, &sequence, DashaLevel::Antar)
}
