//! Explicit drill-down from one level to the next.
//!
//! A caller picks a row, turns it into a [`DrillRequest`] and gets the nine
//! child rows back. Nothing is cached between calls; the same request always
//! produces the same rows.

use anka_time::NaiveDate;

use crate::error::DashaError;
use crate::planet::Planet;

use super::ratio::{FixedRatioTable, RatioKey, partition_with_override};
use super::sequence::rotate_planet;
use super::subperiod::partition;
use super::types::{DashaLevel, DashaRow, DateInterval};

/// Request for the child rows of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillRequest {
    /// Level of the rows to produce.
    pub level: DashaLevel,
    /// Parent period dates.
    pub interval: DateInterval,
    /// Parent period planet; the child sequence starts here.
    pub planet: Planet,
    /// The parent's own parent, when known.
    pub parent_planet: Option<Planet>,
}

impl DrillRequest {
    pub const fn new(level: DashaLevel, from: NaiveDate, to: NaiveDate, planet: Planet) -> Self {
        Self {
            level,
            interval: DateInterval::new(from, to),
            planet,
            parent_planet: None,
        }
    }

    pub const fn with_parent(mut self, parent: Planet) -> Self {
        self.parent_planet = Some(parent);
        self
    }

    /// Request for the children of `row`.
    ///
    /// `None` for placeholder rows and for the deepest level.
    pub fn from_row(row: &DashaRow, parent_planet: Option<Planet>) -> Option<Self> {
        let level = row.level.child_level()?;
        let interval = row.span?;
        Some(Self {
            level,
            interval,
            planet: row.planet,
            parent_planet,
        })
    }

    pub fn from(&self) -> NaiveDate {
        self.interval.start
    }

    pub fn to(&self) -> NaiveDate {
        self.interval.end
    }

    /// Fixed-ratio lookup key for this request.
    pub fn ratio_key(&self) -> RatioKey {
        match self.parent_planet {
            Some(grandparent) => RatioKey::Pair {
                parent: self.planet,
                grandparent,
            },
            None => RatioKey::Parent(self.planet),
        }
    }
}

/// Child rows for `request`.
///
/// `ratios` is consulted for Pratyantar and Dainik requests only.
pub fn drill(
    request: &DrillRequest,
    ratios: Option<&FixedRatioTable>,
) -> Result<Vec<DashaRow>, DashaError> {
    let sequence = rotate_planet(request.planet);
    match (request.level, ratios) {
        (DashaLevel::Pratyantar | DashaLevel::Dainik, Some(table)) => partition_with_override(
            request.interval,
            &sequence,
            request.level,
            table,
            request.ratio_key(),
        ),
        _ => partition(request.interval, &sequence, request.level),
    }
}
