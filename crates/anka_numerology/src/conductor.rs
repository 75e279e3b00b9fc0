//! Driver, conductor and the derived Maha Dasha series.
//!
//! The conductor series lists the ages at which successive Maha Dashas end;
//! the bottom values give the ruling planet number for each of them.

use anka_time::{NaiveDate, ddmmyyyy_digits};
use chrono::Datelike;

use crate::reduce::{reduce, reduce_keep_master, sum_digits};

/// Number of entries in the conductor series and bottom values.
pub const SERIES_LEN: usize = 11;

/// Step between consecutive series ages, in years.
pub const SERIES_STEP: i64 = 9;

/// Offset subtracted from the conductor to get the series base.
pub const CONDUCTOR_BASE_OFFSET: u32 = 36;

struct DateSums {
    day: u32,
    month: u32,
    year: u32,
}

fn date_sums(date: NaiveDate) -> DateSums {
    let digits = ddmmyyyy_digits(date);
    DateSums {
        day: sum_digits(&digits[..2]),
        month: sum_digits(&digits[2..4]),
        year: sum_digits(&digits[4..]),
    }
}

/// Digit sum of the day, reduced, master numbers kept.
pub fn driver(date: NaiveDate) -> u32 {
    reduce_keep_master(date_sums(date).day)
}

/// Digit sum of the whole `DDMMYYYY` date, reduced, master numbers kept.
pub fn conductor(date: NaiveDate) -> u32 {
    reduce_keep_master(sum_digits(&ddmmyyyy_digits(date)))
}

/// `max(1, 36 - conductor)`.
pub fn conductor_base(conductor: u32) -> u32 {
    CONDUCTOR_BASE_OFFSET.saturating_sub(conductor).max(1)
}

/// Eleven ages `base + 9i` for `i` in -5..=5, each lifted by 9 until positive.
pub fn conductor_series(base: u32) -> [u32; SERIES_LEN] {
    std::array::from_fn(|k| {
        let i = k as i64 - 5;
        let mut value = i64::from(base) + i * SERIES_STEP;
        while value <= 0 {
            value += SERIES_STEP;
        }
        value as u32
    })
}

/// Planet numbers paired with the conductor series.
///
/// Four copies of reduced day+month, the reduced day, the reduction of those
/// two, then five copies of reduced month+year.
pub fn bottom_values(date: NaiveDate) -> [u8; SERIES_LEN] {
    let sums = date_sums(date);
    let day_month = reduce(sums.day + sums.month);
    let day = reduce(sums.day);
    let combined = reduce(day_month + day);
    let month_year = reduce(sums.month + sums.year);

    let mut out = [month_year as u8; SERIES_LEN];
    out[..4].fill(day_month as u8);
    out[4] = day as u8;
    out[5] = combined as u8;
    out
}

/// Reduced day of the month.
pub fn soul_number(date: NaiveDate) -> u32 {
    reduce(date.day())
}
