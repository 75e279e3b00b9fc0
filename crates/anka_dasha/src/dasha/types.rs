//! Core types for dasha period tables.
//!
//! Every level of the hierarchy is a list of [`DashaRow`]s produced from a
//! parent [`DateInterval`]. Rows that fall outside a computable range carry
//! no span and render as placeholders.

use anka_time::{NaiveDate, format_cell, whole_days_between};

use crate::planet::Planet;

/// Length of one Maha Dasha in calendar years.
pub const MAHA_SPAN_YEARS: i32 = 9;

/// Rows produced per level (one per planet).
pub const ROWS_PER_LEVEL: usize = 9;

/// 4 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Maha = 0,
    Antar = 1,
    Pratyantar = 2,
    Dainik = 3,
}

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Maha),
            1 => Some(Self::Antar),
            2 => Some(Self::Pratyantar),
            3 => Some(Self::Dainik),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Maha Dasha",
            Self::Antar => "Antar Dasha",
            Self::Pratyantar => "Pratyantar Dasha",
            Self::Dainik => "Dainik Dasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Maha => Some(Self::Antar),
            Self::Antar => Some(Self::Pratyantar),
            Self::Pratyantar => Some(Self::Dainik),
            Self::Dainik => None,
        }
    }
}

/// A closed range of calendar dates, `start <= end` not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whole days from start to end (negative if inverted).
    pub fn days(&self) -> i64 {
        whole_days_between(self.start, self.end)
    }

    /// True when the interval has no positive length.
    pub fn is_degenerate(&self) -> bool {
        self.end <= self.start
    }

    /// True when `date` lies in `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// One row of a dasha table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaRow {
    /// Planet ruling the period; its id seeds the next drill-down.
    pub planet: Planet,
    /// Level the row belongs to.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u8,
    /// Informational day count: the planet's nominal days, the clipped
    /// length for a period truncated at birth, 0 for placeholder rows.
    pub nominal_days: u32,
    /// Dates covered, `None` for placeholder rows.
    pub span: Option<DateInterval>,
}

impl DashaRow {
    /// A placeholder row with no dates.
    pub const fn empty(planet: Planet, level: DashaLevel, order: u8) -> Self {
        Self {
            planet,
            level,
            order,
            nominal_days: 0,
            span: None,
        }
    }

    pub const fn period_name(&self) -> &'static str {
        self.planet.name()
    }

    /// Id of this row's planet (1..=9).
    pub const fn start_period_id(&self) -> u8 {
        self.planet.number()
    }

    pub const fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.span.map(|s| s.start)
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.span.map(|s| s.end)
    }

    /// Whole days actually covered (0 for placeholder rows).
    pub fn elapsed_days(&self) -> i64 {
        self.span.map_or(0, |s| s.days())
    }

    /// `DD/MM/YYYY` start date, or an em-dash.
    pub fn from_display(&self) -> String {
        format_cell(self.from())
    }

    /// `DD/MM/YYYY` end date, or an em-dash.
    pub fn to_display(&self) -> String {
        format_cell(self.to())
    }
}
