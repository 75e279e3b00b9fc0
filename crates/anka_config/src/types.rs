//! Configuration type definitions.

use anka_dasha::{FixedRatioTable, Planet, RatioKey};
use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level contents of `anka.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnkaConfig {
    #[serde(default)]
    pub drill: DrillConfig,

    #[serde(default)]
    pub ratios: Vec<RatioEntryConfig>,
}

/// Drill-down preferences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrillConfig {
    /// Use fixed day-count tables for Pratyantar and Dainik when present.
    #[serde(default = "default_fixed_ratio_override")]
    pub fixed_ratio_override: bool,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            fixed_ratio_override: default_fixed_ratio_override(),
        }
    }
}

fn default_fixed_ratio_override() -> bool {
    true
}

/// One `[[ratios]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatioEntryConfig {
    pub parent: String,
    #[serde(default)]
    pub grandparent: Option<String>,
    pub days: Vec<u32>,
}

impl RatioEntryConfig {
    /// Validated lookup key and day counts.
    pub fn resolve(&self) -> Result<(RatioKey, [u32; 9]), ConfigError> {
        let parent: Planet = self.parent.parse()?;
        let key = match &self.grandparent {
            Some(g) => RatioKey::Pair {
                parent,
                grandparent: g.parse()?,
            },
            None => RatioKey::Parent(parent),
        };
        let days: [u32; 9] = self.days.as_slice().try_into().map_err(|_| {
            ConfigError::Invalid(format!(
                "ratio entry for {} has {} day counts, expected 9",
                describe(key),
                self.days.len()
            ))
        })?;
        Ok((key, days))
    }
}

fn describe(key: RatioKey) -> String {
    match key {
        RatioKey::Parent(p) => p.name().to_string(),
        RatioKey::Pair {
            parent,
            grandparent,
        } => format!("{parent}/{grandparent}"),
    }
}

impl AnkaConfig {
    /// Build the fixed-ratio table from every `[[ratios]]` entry.
    ///
    /// Fails on unknown planet names, wrong array lengths, zero sums and
    /// repeated keys.
    pub fn ratio_table(&self) -> Result<FixedRatioTable, ConfigError> {
        let mut table = FixedRatioTable::new();
        for entry in &self.ratios {
            let (key, days) = entry.resolve()?;
            if table.insert(key, days)?.is_some() {
                return Err(ConfigError::Invalid(format!(
                    "duplicate ratio entry for {}",
                    describe(key)
                )));
            }
        }
        Ok(table)
    }

    /// Table to pass to drill-down, `None` when disabled or empty.
    pub fn active_ratio_table(&self) -> Result<Option<FixedRatioTable>, ConfigError> {
        if !self.drill.fixed_ratio_override {
            return Ok(None);
        }
        let table = self.ratio_table()?;
        Ok((!table.is_empty()).then_some(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(parent: &str, grandparent: Option<&str>, days: Vec<u32>) -> RatioEntryConfig {
        RatioEntryConfig {
            parent: parent.to_string(),
            grandparent: grandparent.map(str::to_string),
            days,
        }
    }

    #[test]
    fn default_enables_override_with_no_entries() {
        let config = AnkaConfig::default();
        assert!(config.drill.fixed_ratio_override);
        assert!(config.ratios.is_empty());
        assert_eq!(config.active_ratio_table().unwrap(), None);
    }

    #[test]
    fn resolves_pair_key() {
        let e = entry("surya", Some("Chandra"), vec![1; 9]);
        let (key, days) = e.resolve().unwrap();
        assert_eq!(
            key,
            RatioKey::Pair {
                parent: Planet::Surya,
                grandparent: Planet::Chandra,
            }
        );
        assert_eq!(days, [1; 9]);
    }

    #[test]
    fn rejects_wrong_length() {
        let e = entry("GURU", None, vec![1; 8]);
        assert!(matches!(e.resolve(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_unknown_planet() {
        let e = entry("PLUTO", None, vec![1; 9]);
        assert!(matches!(e.resolve(), Err(ConfigError::Dasha(_))));
    }

    #[test]
    fn rejects_duplicates() {
        let config = AnkaConfig {
            drill: DrillConfig::default(),
            ratios: vec![
                entry("GURU", None, vec![1; 9]),
                entry("guru", None, vec![2; 9]),
            ],
        };
        assert!(matches!(config.ratio_table(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn disabled_override_yields_no_table() {
        let config = AnkaConfig {
            drill: DrillConfig {
                fixed_ratio_override: false,
            },
            ratios: vec![entry("GURU", None, vec![1; 9])],
        };
        assert_eq!(config.active_ratio_table().unwrap(), None);
        assert_eq!(config.ratio_table().unwrap().len(), 1);
    }
}
