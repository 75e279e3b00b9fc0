//! Proportional sub-period allocation over whole calendar days.
//!
//! A parent interval of `N` whole days is split among a sequence of periods
//! in proportion to their nominal days. Every allocation except the last is
//! rounded half-up; the last one takes whatever remains, so the children
//! always close exactly on the parent's end date.

use anka_time::add_days;
use tracing::trace;

use crate::error::DashaError;
use crate::planet::PeriodDefinition;

use super::types::{DashaLevel, DashaRow, DateInterval};

/// `round(weight / total_weight * total_days)`, rounding halves up.
///
/// Integer arithmetic keeps the result independent of floating-point
/// representation. Requires `total_weight > 0` and `total_days >= 0`.
pub fn round_half_up_share(weight: u32, total_weight: u64, total_days: i64) -> i64 {
    let num = 2 * u128::from(weight) * total_days.max(0) as u128 + u128::from(total_weight);
    let den = 2 * u128::from(total_weight);
    (num / den) as i64
}

/// Split `total_days` among `weights`, forcing the last share to absorb
/// rounding drift.
///
/// A rounded share never exceeds the days still unallocated, so no share is
/// negative even when rounding up several small periods overshoots.
pub fn proportional_allocations(weights: &[u32], total_days: i64) -> Vec<i64> {
    let total_weight: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    let mut remaining = total_days.max(0);
    let mut shares = Vec::with_capacity(weights.len());
    let last = weights.len().saturating_sub(1);

    for (i, &w) in weights.iter().enumerate() {
        let share = if i == last {
            remaining
        } else if total_weight == 0 {
            0
        } else {
            round_half_up_share(w, total_weight, total_days).min(remaining)
        };
        remaining -= share;
        shares.push(share);
    }
    shares
}

/// Placeholder rows for every period of `sequence`.
pub fn empty_rows(sequence: &[PeriodDefinition], level: DashaLevel) -> Vec<DashaRow> {
    sequence
        .iter()
        .enumerate()
        .map(|(i, def)| DashaRow::empty(def.planet, level, (i as u8) + 1))
        .collect()
}

/// Lay out consecutive rows from `start` using precomputed day counts.
pub fn rows_from_allocations(
    interval: DateInterval,
    sequence: &[PeriodDefinition],
    allocations: &[i64],
    level: DashaLevel,
) -> Result<Vec<DashaRow>, DashaError> {
    let mut rows = Vec::with_capacity(sequence.len());
    let mut cursor = interval.start;

    for (order_0, (def, &days)) in sequence.iter().zip(allocations).enumerate() {
        let end = add_days(cursor, days)?;
        rows.push(DashaRow {
            planet: def.planet,
            level,
            order: (order_0 as u8) + 1,
            nominal_days: def.nominal_days,
            span: Some(DateInterval::new(cursor, end)),
        });
        cursor = end;
    }

    debug_assert_eq!(cursor, interval.end, "allocations must close the interval");
    Ok(rows)
}

/// Partition `interval` among `sequence` in proportion to nominal days.
///
/// Rows are contiguous, their day counts sum to the interval length, and the
/// last row ends on `interval.end`. A zero-length or inverted interval
/// yields one placeholder row per period instead.
pub fn partition(
    interval: DateInterval,
    sequence: &[PeriodDefinition],
    level: DashaLevel,
) -> Result<Vec<DashaRow>, DashaError> {
    if interval.is_degenerate() || sequence.is_empty() {
        trace!(level = level.name(), "degenerate interval");
        return Ok(empty_rows(sequence, level));
    }

    let total_days = interval.days();

    let weights: Vec<u32> = sequence.iter().map(|d| d.nominal_days).collect();
    let allocations = proportional_allocations(&weights, total_days);
    trace!(level = level.name(), total_days, ?allocations, "partition");
    rows_from_allocations(interval, sequence, &allocations, level)
}
