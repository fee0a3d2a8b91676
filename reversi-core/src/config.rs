use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{MAX_DIMENSION, MIN_DIMENSION, STANDARD_DIMENSION};
use crate::error::ConfigError;

/// Which empty cells are tested when building a legal move set.
///
/// Both strategies produce identical sets; `Adjacent` skips cells with no
/// occupied neighbor, which can never be legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateScan {
    #[default]
    Adjacent,
    Exhaustive,
}

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension N (even, 4..=26).
    pub dimension: usize,
    pub candidates: CandidateScan,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            dimension: STANDARD_DIMENSION,
            candidates: CandidateScan::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension % 2 != 0 {
            return Err(ConfigError::Validation(format!(
                "dimension must be even, got {}",
                self.dimension
            )));
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.dimension) {
            return Err(ConfigError::Validation(format!(
                "dimension must be in [{}, {}], got {}",
                MIN_DIMENSION, MAX_DIMENSION, self.dimension
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.dimension, 8);
        assert_eq!(config.candidates, CandidateScan::Adjacent);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("dimension = 6").unwrap();
        assert_eq!(config.dimension, 6);
        assert_eq!(config.candidates, CandidateScan::Adjacent);
    }

    #[test]
    fn test_candidates_parse() {
        let config: GameConfig = toml::from_str(r#"candidates = "exhaustive""#).unwrap();
        assert_eq!(config.candidates, CandidateScan::Exhaustive);
        assert_eq!(config.dimension, 8);
    }

    #[test]
    fn test_validation_rejects_odd_dimension() {
        let config = GameConfig {
            dimension: 7,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_dimension() {
        for dimension in [2, 28] {
            let config = GameConfig {
                dimension,
                ..GameConfig::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_reversi.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reversi.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "dimension = 10\ncandidates = \"exhaustive\"").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.dimension, 10);
        assert_eq!(config.candidates, CandidateScan::Exhaustive);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reversi.toml");
        std::fs::write(&path, "dimension = 9\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "dimension = \"eight\"\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let text = GameConfig::default_toml().unwrap();
        let config: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
