//! Configuration for the anka tools.
//!
//! Reads `anka.toml` (fixed-ratio tables and drill-down preferences) and
//! applies `ANKA_*` environment overrides.

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{
    CONFIG_PATH_ENV, FIXED_RATIO_OVERRIDE_ENV, apply_overrides, load, load_from_str,
    load_or_default, resolve,
};
pub use types::{AnkaConfig, DrillConfig, RatioEntryConfig};
