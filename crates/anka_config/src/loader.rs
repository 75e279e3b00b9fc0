//! Configuration loading and environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;
use crate::types::AnkaConfig;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "ANKA_CONFIG";

/// Environment variable forcing `[drill] fixed_ratio_override`.
pub const FIXED_RATIO_OVERRIDE_ENV: &str = "ANKA_FIXED_RATIO_OVERRIDE";

/// Parse configuration text and validate its ratio entries.
pub fn load_from_str(content: &str) -> Result<AnkaConfig, ConfigError> {
    let config: AnkaConfig = toml::from_str(content)?;
    config.ratio_table()?;
    Ok(config)
}

/// Load and validate a configuration file.
pub fn load(path: &Path) -> Result<AnkaConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, &e))?;
    let config = load_from_str(&content)?;
    debug!(path = %path.display(), ratios = config.ratios.len(), "loaded config");
    Ok(config)
}

/// Config file to use: the explicit path, else `ANKA_CONFIG`.
pub fn config_path(explicit: Option<&Path>, lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| lookup(CONFIG_PATH_ENV).filter(|s| !s.is_empty()).map(PathBuf::from))
}

/// Apply `ANKA_*` overrides read through `lookup`.
pub fn apply_overrides(mut config: AnkaConfig, lookup: impl Fn(&str) -> Option<String>) -> AnkaConfig {
    if let Some(val) = lookup(FIXED_RATIO_OVERRIDE_ENV) {
        let val = val.trim().to_lowercase();
        config.drill.fixed_ratio_override = !matches!(val.as_str(), "0" | "false" | "off" | "no");
    }
    config
}

/// Resolve, load and override in one step, reading the process environment.
///
/// With no path given and no `ANKA_CONFIG`, built-in defaults are used. An
/// explicitly named file that cannot be loaded is an error.
pub fn load_or_default(explicit: Option<&Path>) -> Result<AnkaConfig, ConfigError> {
    resolve(explicit, |k| std::env::var(k).ok())
}

/// [`load_or_default`] with an injectable environment.
pub fn resolve(
    explicit: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AnkaConfig, ConfigError> {
    let config = match config_path(explicit, &lookup) {
        Some(path) => load(&path)?,
        None => {
            debug!("no config file, using defaults");
            AnkaConfig::default()
        }
    };
    Ok(apply_overrides(config, lookup))
}
