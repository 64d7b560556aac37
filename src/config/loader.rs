//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::validate_weights;
use crate::error::{EngineError, EngineResult};
use crate::models::ScoreWeights;

use super::types::{EngineMetadata, GrooveConfig, ScoringConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/groove/
/// ├── engine.yaml   # Deployment metadata
/// └── scoring.yaml  # Default Groove Score category weights
/// ```
///
/// The default weights are validated while loading, so a configuration
/// whose weights do not sum to 100 never becomes available to a request.
///
/// # Example
///
/// ```no_run
/// use groove_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/groove")?;
/// println!("Attendance weight: {}", loader.default_weights().attendance);
/// # Ok::<(), groove_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: GrooveConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file is missing
    /// - [`EngineError::ConfigParseError`] if a file contains invalid YAML
    ///   or lacks a required field
    /// - [`EngineError::InvalidWeightConfig`] if the default weights do not
    ///   sum to 100
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let scoring = Self::load_yaml::<ScoringConfig>(&path.join("scoring.yaml"))?;

        validate_weights(&scoring.default_weights, 1)?;

        Ok(Self {
            config: GrooveConfig::new(metadata, scoring),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the category weights used when a request supplies none.
    pub fn default_weights(&self) -> ScoreWeights {
        self.config.scoring().default_weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/groove"
    }

    /// Writes a throwaway config directory under the system temp dir.
    fn scratch_config(name: &str, engine: Option<&str>, scoring: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "groove_engine_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        if let Some(engine) = engine {
            fs::write(dir.join("engine.yaml"), engine).unwrap();
        }
        if let Some(scoring) = scoring {
            fs::write(dir.join("scoring.yaml"), scoring).unwrap();
        }
        dir
    }

    const ENGINE_YAML: &str = "name: Test Deployment\nversion: \"test\"\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.engine().name, "Groove Engine");
        assert_eq!(loader.default_weights(), ScoreWeights::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_scoring_file_returns_error() {
        let dir = scratch_config("missing_scoring", Some(ENGINE_YAML), None);
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("scoring.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = scratch_config(
            "malformed",
            Some(ENGINE_YAML),
            Some("default_weights: [unclosed"),
        );
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_weight_field_returns_parse_error() {
        let dir = scratch_config(
            "missing_field",
            Some(ENGINE_YAML),
            Some("default_weights:\n  attendance: 50\n  punctuality: 50\n"),
        );
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("task_efficiency"), "message: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_weights_not_summing_to_100_rejected_at_load() {
        let dir = scratch_config(
            "bad_weights",
            Some(ENGINE_YAML),
            Some(
                "default_weights:\n  attendance: 30\n  punctuality: 30\n  task_efficiency: 20\n  customer_reviews: 21\n",
            ),
        );
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::InvalidWeightConfig { total: 101 })
        ));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_custom_weights_loaded() {
        let dir = scratch_config(
            "custom_weights",
            Some(ENGINE_YAML),
            Some(
                "default_weights:\n  attendance: 25\n  punctuality: 25\n  task_efficiency: 25\n  customer_reviews: 25\n",
            ),
        );
        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.default_weights().task_efficiency, 25);
        assert_eq!(loader.engine().version, "test");
        let _ = fs::remove_dir_all(dir);
    }
}
