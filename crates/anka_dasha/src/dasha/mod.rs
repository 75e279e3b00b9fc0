//! Dasha period tables over calendar dates.
//!
//! Four hierarchical levels (Maha, Antar, Pratyantar, Dainik), each a list of
//! nine rows in a rotated fixed order. A level is computed from its parent's
//! dates in one of three ways:
//! - proportional partition by nominal days (forward),
//! - a backward walk from a post-birth anchor for periods that began before
//!   birth (retro),
//! - a fixed day-count table rescaled to the parent (override), which falls
//!   back to the proportional partition when no entry exists.

pub mod drill;
pub mod forward;
pub mod maha;
pub mod ratio;
pub mod retro;
pub mod sequence;
pub mod subperiod;
pub mod types;

pub use drill::{DrillRequest, drill};
pub use forward::{forward, maha_interval};
pub use maha::{MahaDashaEntry, active_entry, age_on, antar_rows, maha_timeline};
pub use ratio::{FixedRatioTable, RatioKey, backward_allocations, partition_with_override};
pub use retro::retro;
pub use sequence::{rotate, rotate_planet};
pub use subperiod::{empty_rows, partition, proportional_allocations, rows_from_allocations};
pub use types::{DashaLevel, DashaRow, DateInterval, MAHA_SPAN_YEARS, ROWS_PER_LEVEL};
