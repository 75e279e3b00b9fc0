//! Numerological dasha periods over calendar dates.
//!
//! This crate provides:
//! - The nine-planet period catalogue and its rotated traversal order
//! - Proportional subdivision of a date range into nine sub-periods
//! - Forward Antar Dasha rows and pre-birth rows walked back from an anchor
//! - Optional fixed day-count tables for the deeper levels
//! - Explicit drill-down from any row to its children
//!
//! All computations are pure functions of calendar dates and whole days.

pub mod dasha;
pub mod error;
pub mod planet;

pub use dasha::{
    DashaLevel, DashaRow, DateInterval, DrillRequest, FixedRatioTable, MahaDashaEntry, RatioKey,
    drill, forward, maha_timeline, partition, partition_with_override, retro, rotate,
};
pub use error::DashaError;
pub use planet::{
    ALL_PLANETS, CANONICAL_SEQUENCE, PERIOD_CATALOGUE, PeriodDefinition, Planet, TOTAL_NOMINAL_DAYS,
};
