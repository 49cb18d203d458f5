//! Quadtree configuration.

use serde::{Deserialize, Serialize};

use crate::error::QuadtreeError;

/// Subdivision parameters shared by every node of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuadtreeConfig {
    /// Deepest level a node may sit at. Nodes at this level never split.
    #[serde(default = "default_max_depth")]
    pub max_depth: u8,
    /// Shape count a node may hold before it tries to split.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl QuadtreeConfig {
    pub fn new(max_depth: u8, capacity: usize) -> Self {
        Self { max_depth, capacity }
    }

    /// Parse a config from TOML. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, QuadtreeError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String, QuadtreeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            capacity: default_capacity(),
        }
    }
}

fn default_max_depth() -> u8 {
    8
}

fn default_capacity() -> usize {
    64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = QuadtreeConfig::from_toml("capacity = 4").unwrap();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.max_depth, 8);

        let empty = QuadtreeConfig::from_toml("").unwrap();
        assert_eq!(empty, QuadtreeConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = QuadtreeConfig::new(3, 12);
        let text = config.to_toml().unwrap();
        assert!(text.contains("max_depth = 3"));
        assert_eq!(QuadtreeConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = QuadtreeConfig::from_toml("max_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, QuadtreeError::ConfigParse(_)));
    }
}
