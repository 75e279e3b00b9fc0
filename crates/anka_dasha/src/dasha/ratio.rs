//! Fixed day-count tables for the Pratyantar and Dainik levels.
//!
//! Some parent periods (or parent/grandparent pairs) use hand-tuned day
//! counts instead of nominal days. An entry is a 9-element array aligned
//! with the rotated sequence of the level being partitioned. Entries are
//! rescaled to the parent's actual length and laid out backward from the
//! parent's end. Keys with no entry use the ordinary proportional rule.

use std::collections::BTreeMap;

use anka_time::add_days;
use tracing::debug;

use crate::error::DashaError;
use crate::planet::{PeriodDefinition, Planet};

use super::subperiod::{empty_rows, partition, round_half_up_share};
use super::types::{DashaLevel, DashaRow, DateInterval, ROWS_PER_LEVEL};

/// Lookup key into a [`FixedRatioTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioKey {
    /// Keyed by the parent period only.
    Parent(Planet),
    /// Keyed by the parent period and its own parent.
    Pair { parent: Planet, grandparent: Planet },
}

impl RatioKey {
    pub const fn parent(&self) -> Planet {
        match self {
            Self::Parent(p) => *p,
            Self::Pair { parent, .. } => *parent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ParentEntry {
    own: Option<[u32; ROWS_PER_LEVEL]>,
    by_grandparent: BTreeMap<Planet, [u32; ROWS_PER_LEVEL]>,
}

/// Two-level mapping: parent → (optional grandparent) → day counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedRatioTable {
    entries: BTreeMap<Planet, ParentEntry>,
}

impl FixedRatioTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry, returning the previous one.
    ///
    /// Rejects arrays whose day counts sum to zero.
    pub fn insert(
        &mut self,
        key: RatioKey,
        days: [u32; ROWS_PER_LEVEL],
    ) -> Result<Option<[u32; ROWS_PER_LEVEL]>, DashaError> {
        if days.iter().all(|&d| d == 0) {
            return Err(DashaError::RatioTable("day counts sum to zero"));
        }
        let entry = self.entries.entry(key.parent()).or_default();
        let previous = match key {
            RatioKey::Parent(_) => entry.own.replace(days),
            RatioKey::Pair { grandparent, .. } => entry.by_grandparent.insert(grandparent, days),
        };
        Ok(previous)
    }

    /// Day counts for exactly this key.
    pub fn get(&self, key: RatioKey) -> Option<&[u32; ROWS_PER_LEVEL]> {
        let entry = self.entries.get(&key.parent())?;
        match key {
            RatioKey::Parent(_) => entry.own.as_ref(),
            RatioKey::Pair { grandparent, .. } => entry.by_grandparent.get(&grandparent),
        }
    }

    pub fn contains(&self, key: RatioKey) -> bool {
        self.get(key).is_some()
    }

    /// Number of stored arrays.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .map(|e| usize::from(e.own.is_some()) + e.by_grandparent.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scaled day counts laid out backward from the end of a `total_days` span.
///
/// Walking from the last entry to the first, each entry takes its rounded
/// share but never more than the days still unallocated. The first entry
/// takes whatever is left so the rows reach the interval start. Entries
/// whose share rounds to zero, or that are reached after the budget is
/// spent, get `None`; every `Some` length is at least one day.
pub fn backward_allocations(
    table: &[u32; ROWS_PER_LEVEL],
    total_days: i64,
) -> [Option<i64>; ROWS_PER_LEVEL] {
    let table_sum: u64 = table.iter().map(|&d| u64::from(d)).sum();
    let mut remaining = total_days.max(0);
    let mut lengths = [None; ROWS_PER_LEVEL];

    for i in (0..table.len()).rev() {
        if remaining == 0 {
            break;
        }
        let share = if i == 0 {
            remaining
        } else {
            round_half_up_share(table[i], table_sum, total_days).min(remaining)
        };
        if share > 0 {
            lengths[i] = Some(share);
            remaining -= share;
        }
    }
    lengths
}

/// Partition `interval`, using the table entry for `key` when one exists.
///
/// Without an entry this is exactly [`partition`].
pub fn partition_with_override(
    interval: DateInterval,
    sequence: &[PeriodDefinition],
    level: DashaLevel,
    table: &FixedRatioTable,
    key: RatioKey,
) -> Result<Vec<DashaRow>, DashaError> {
    let Some(days) = table.get(key).filter(|_| sequence.len() == ROWS_PER_LEVEL) else {
        debug!(?key, level = level.name(), "no fixed-ratio entry, using nominal days");
        return partition(interval, sequence, level);
    };

    if interval.is_degenerate() {
        return Ok(empty_rows(sequence, level));
    }

    let total_days = interval.days();
    let lengths = backward_allocations(days, total_days);
    let mut rows = Vec::with_capacity(sequence.len());
    let mut cursor = interval.end;

    for (order_0, def) in sequence.iter().enumerate().rev() {
        let order = (order_0 as u8) + 1;
        match lengths[order_0] {
            Some(len) => {
                let start = add_days(cursor, -len)?;
                rows.push(DashaRow {
                    planet: def.planet,
                    level,
                    order,
                    nominal_days: def.nominal_days,
                    span: Some(DateInterval::new(start, cursor)),
                });
                cursor = start;
            }
            None => rows.push(DashaRow::empty(def.planet, level, order)),
        }
    }

    rows.reverse();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::sequence::rotate;
    use anka_time::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const EVEN: [u32; 9] = [10, 10, 10, 10, 10, 10, 10, 10, 10];

    #[test]
    fn insert_and_lookup_are_exact() {
        let mut table = FixedRatioTable::new();
        let pair = RatioKey::Pair {
            parent: Planet::Surya,
            grandparent: Planet::Chandra,
        };
        assert_eq!(table.insert(pair, EVEN).unwrap(), None);
        assert!(table.contains(pair));
        assert!(!table.contains(RatioKey::Parent(Planet::Surya)));
        assert!(!table.contains(RatioKey::Pair {
            parent: Planet::Surya,
            grandparent: Planet::Guru,
        }));
        assert_eq!(table.len(), 1);

        table.insert(RatioKey::Parent(Planet::Surya), EVEN).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.insert(pair, [1; 9]).unwrap(), Some(EVEN));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn zero_entries_rejected() {
        let mut table = FixedRatioTable::new();
        assert!(table.insert(RatioKey::Parent(Planet::Rahu), [0; 9]).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn backward_allocations_cover_span() {
        let lengths = backward_allocations(&EVEN, 95);
        let total: i64 = lengths.iter().flatten().sum();
        assert_eq!(total, 95);
        // 95 / 9 = 10.56 -> 11 for entries 8..1, first takes the rest.
        assert_eq!(lengths[8], Some(11));
        assert_eq!(lengths[0], Some(95 - 8 * 11));
    }

    #[test]
    fn backward_allocations_zero_out_early_entries() {
        // 4 days over nine equal entries: shares of 0.44 round to 0, so those
        // entries get no span and the first entry takes everything.
        let lengths = backward_allocations(&EVEN, 4);
        assert_eq!(lengths[0], Some(4));
        assert!(lengths[1..].iter().all(|l| l.is_none()));

        // A heavy tail consumes the budget before the walk reaches the start.
        let tail = [1, 1, 1, 1, 1, 1, 1, 1, 100];
        let lengths = backward_allocations(&tail, 2);
        assert_eq!(lengths[8], Some(2));
        assert!(lengths[..8].iter().all(|l| l.is_none()));
    }

    #[test]
    fn override_closes_on_both_ends() {
        let mut table = FixedRatioTable::new();
        let key = RatioKey::Parent(Planet::Guru);
        table
            .insert(key, [40, 12, 30, 25, 18, 44, 9, 21, 33])
            .unwrap();
        let iv = DateInterval::new(ymd(2012, 3, 1), ymd(2013, 4, 17));
        let seq = rotate(3).unwrap();
        let rows = partition_with_override(iv, &seq, DashaLevel::Pratyantar, &table, key).unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].from(), Some(iv.start));
        assert_eq!(rows[8].to(), Some(iv.end));
        for pair in rows.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
        let total: i64 = rows.iter().map(|r| r.elapsed_days()).sum();
        assert_eq!(total, iv.days());
        assert_eq!(rows[0].planet, Planet::Guru);
    }

    #[test]
    fn missing_key_matches_plain_partition() {
        let mut table = FixedRatioTable::new();
        table.insert(RatioKey::Parent(Planet::Guru), EVEN).unwrap();
        let iv = DateInterval::new(ymd(2012, 3, 1), ymd(2013, 4, 17));
        let seq = rotate(8).unwrap();
        let key = RatioKey::Parent(Planet::Shani);
        let with = partition_with_override(iv, &seq, DashaLevel::Dainik, &table, key).unwrap();
        let plain = partition(iv, &seq, DashaLevel::Dainik).unwrap();
        assert_eq!(with, plain);
    }

    #[test]
    fn override_degenerate_is_all_empty() {
        let mut table = FixedRatioTable::new();
        let key = RatioKey::Parent(Planet::Ketu);
        table.insert(key, EVEN).unwrap();
        let d = ymd(2020, 5, 5);
        let rows = partition_with_override(
            DateInterval::new(d, d),
            &rotate(7).unwrap(),
            DashaLevel::Dainik,
            &table,
            key,
        )
        .unwrap();
        assert!(rows.iter().all(|r| r.is_empty()));
    }

    #[test]
    fn short_override_has_no_zero_length_rows() {
        let mut table = FixedRatioTable::new();
        let key = RatioKey::Parent(Planet::Ketu);
        table.insert(key, EVEN).unwrap();
        let iv = DateInterval::new(ymd(2020, 5, 5), ymd(2020, 5, 9));
        let seq = rotate(7).unwrap();
        let rows = partition_with_override(iv, &seq, DashaLevel::Dainik, &table, key).unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].span, Some(iv));
        assert!(rows[1..].iter().all(|r| r.is_empty()));
        assert!(rows.iter().flat_map(|r| r.span).all(|s| s.days() > 0));
    }
}
