//! Generation configuration loaded from TOML
//!
//! A config file can name the subsector, pin the dice seed, and bias the
//! world-presence roll for specific hexes before generation runs.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::Result;

/// Bias applied to one hex's world-presence roll
///
/// Positive modifiers make a world more likely (the presence check is
/// 1d6 + modifier >= 4), negative ones less likely.
#[derive(Debug, Clone, Deserialize)]
pub struct HexBias {
    /// Cell index in 0..80 (row * 10 + col)
    pub cell: usize,
    /// Modifier added to that cell's presence roll
    pub modifier: i32,
}

/// Configuration for one generation run
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Display name for the subsector
    #[serde(default = "default_name")]
    pub name: String,

    /// Dice seed; a random one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Per-hex presence-roll biases
    #[serde(default)]
    pub bias: Vec<HexBias>,
}

fn default_name() -> String {
    "Unnamed Subsector".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            seed: None,
            bias: Vec::new(),
        }
    }
}

impl GenerationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.name, "Unnamed Subsector");
        assert!(config.seed.is_none());
        assert!(config.bias.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = GenerationConfig::from_toml_str(
            r#"
            name = "Spinward Marches"
            seed = 42

            [[bias]]
            cell = 12
            modifier = 2

            [[bias]]
            cell = 45
            modifier = -1
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "Spinward Marches");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.bias.len(), 2);
        assert_eq!(config.bias[0].cell, 12);
        assert_eq!(config.bias[1].modifier, -1);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = GenerationConfig::from_toml_str("").unwrap();
        assert_eq!(config.name, "Unnamed Subsector");
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_parse_error_is_surfaced() {
        assert!(GenerationConfig::from_toml_str("seed = \"not a number\"").is_err());
    }
}
