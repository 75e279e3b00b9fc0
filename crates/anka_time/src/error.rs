//! Error types for calendar-date handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date parsing or calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Input string is not a recognised calendar date.
    Malformed(String),
    /// Arithmetic left the representable calendar range.
    OutOfRange,
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(input) => {
                write!(f, "malformed date '{input}' (expected YYYY-MM-DD or DD/MM/YYYY)")
            }
            Self::OutOfRange => write!(f, "date arithmetic out of calendar range"),
        }
    }
}

impl Error for DateError {}
