//! Birth-date and name numerology.
//!
//! This crate provides:
//! - Lo Shu digit grid and the eight named planes
//! - Driver and conductor numbers, the conductor series and bottom values
//!   that seed the Maha Dasha timeline
//! - Chaldean name, soul-urge and personality numbers

pub mod chaldean;
pub mod conductor;
pub mod error;
pub mod loshu;
pub mod planes;
pub mod reduce;
pub mod report;

pub use chaldean::{ChaldeanNumbers, chaldean};
pub use conductor::{
    SERIES_LEN, bottom_values, conductor, conductor_base, conductor_series, driver, soul_number,
};
pub use error::NumerologyError;
pub use loshu::{LO_SHU_LAYOUT, LoShuGrid};
pub use planes::{PLANES, Plane, formed_planes};
pub use reduce::{reduce, reduce_keep_master};
pub use report::NumerologyReport;
