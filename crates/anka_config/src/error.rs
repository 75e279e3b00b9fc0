//! Error types for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use anka_dasha::DashaError;

/// Errors from reading or validating a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// File could not be read.
    Io(String),
    /// File is not valid TOML for the expected schema.
    Parse(String),
    /// File parsed but a value is unacceptable.
    Invalid(String),
    /// A ratio entry was rejected by the dasha crate.
    Dasha(DashaError),
}

impl ConfigError {
    pub(crate) fn io(path: &Path, e: &std::io::Error) -> Self {
        Self::Io(format!("{}: {e}", path.display()))
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "cannot read config: {msg}"),
            Self::Parse(msg) => write!(f, "cannot parse config: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
            Self::Dasha(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dasha(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DashaError> for ConfigError {
    fn from(e: DashaError) -> Self {
        Self::Dasha(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
