//! Pre-birth Antar Dasha rows, walked backward from a future anchor.
//!
//! A Maha Dasha that began before birth has no forward anchor. Its rows are
//! computed from the anchor `birth + years` by subtracting nominal days
//! period by period. The one period that straddles birth is clipped to start
//! on the birth date; every period before it is a placeholder.

use anka_time::{NaiveDate, add_days, add_years, whole_days_between};
use tracing::debug;

use crate::error::DashaError;

use super::sequence::rotate;
use super::subperiod::empty_rows;
use super::types::{DashaLevel, DashaRow, DateInterval};

/// Pre-birth Antar Dasha rows in chronological order.
///
/// When the backward walk never reaches `birth` all nine rows are full.
/// An anchor on or before `birth` yields nine placeholder rows.
pub fn retro(
    birth: NaiveDate,
    start_period_id: u8,
    years_before_birth: i32,
) -> Result<Vec<DashaRow>, DashaError> {
    let sequence = rotate(start_period_id)?;
    let level = DashaLevel::Antar;
    let anchor = add_years(birth, years_before_birth)?;
    if anchor <= birth {
        debug!(%birth, %anchor, "pre-birth anchor not after birth");
        return Ok(empty_rows(&sequence, level));
    }

    let mut rows = Vec::with_capacity(sequence.len());
    let mut cursor = anchor;
    let mut crossed = false;

    for (order_0, def) in sequence.iter().enumerate().rev() {
        let order = (order_0 as u8) + 1;
        if crossed {
            rows.push(DashaRow::empty(def.planet, level, order));
            continue;
        }

        let candidate = add_days(cursor, -i64::from(def.nominal_days))?;
        if candidate > birth {
            rows.push(DashaRow {
                planet: def.planet,
                level,
                order,
                nominal_days: def.nominal_days,
                span: Some(DateInterval::new(candidate, cursor)),
            });
            cursor = candidate;
        } else {
            let days = whole_days_between(birth, cursor);
            debug!(planet = def.planet.name(), days, "period clipped at birth");
            rows.push(DashaRow {
                planet: def.planet,
                level,
                order,
                nominal_days: u32::try_from(days).unwrap_or(def.nominal_days),
                span: Some(DateInterval::new(birth, cursor)),
            });
            crossed = true;
        }
    }

    rows.reverse();
    Ok(rows)
}
