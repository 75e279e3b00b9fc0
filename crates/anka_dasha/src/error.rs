//! Error types for dasha calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use anka_time::DateError;

/// Errors from dasha calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DashaError {
    /// Period id outside 1..=9.
    InvalidPeriodId(u8),
    /// Planet name not in the catalogue.
    UnknownPlanet(String),
    /// Calendar arithmetic failed.
    Date(DateError),
    /// Fixed-ratio table entry rejected.
    RatioTable(&'static str),
}

impl Display for DashaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPeriodId(id) => write!(f, "invalid period id {id} (expected 1-9)"),
            Self::UnknownPlanet(name) => write!(f, "unknown planet '{name}'"),
            Self::Date(e) => write!(f, "date error: {e}"),
            Self::RatioTable(msg) => write!(f, "invalid fixed-ratio entry: {msg}"),
        }
    }
}

impl Error for DashaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Date(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DateError> for DashaError {
    fn from(e: DateError) -> Self {
        Self::Date(e)
    }
}
