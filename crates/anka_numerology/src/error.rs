//! Error types for numerology calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from numerology calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Name has no letters to score.
    EmptyName,
}

impl Display for NumerologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name contains no letters"),
        }
    }
}

impl Error for NumerologyError {}
