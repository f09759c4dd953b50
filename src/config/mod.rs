//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object or a missing file
//! yields the classic rules: three lives, `High` from 80%, `Mid` from 50%.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod error;

pub use error::ConfigError;

/// Lives granted at the start of every run unless configured otherwise.
pub const DEFAULT_LIVES: u32 = 3;

/// Percentage cut-offs for the grade tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    /// Minimum percentage for `High`.
    pub high: u32,
    /// Minimum percentage for `Mid`.
    pub mid: u32,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self { high: 80, mid: 50 }
    }
}

/// Configuration of a quiz engine.
///
/// # Example
///
/// ```rust
/// use trivia_engine::config::QuizConfig;
///
/// let config = QuizConfig::from_json_str(r#"{"lives": 5}"#).unwrap();
/// assert_eq!(config.lives, 5);
/// assert_eq!(config.grading.high, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Lives at the start of every run.
    pub lives: u32,
    pub grading: GradeThresholds,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            grading: GradeThresholds::default(),
        }
    }
}

impl QuizConfig {
    /// Parses and validates configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::ParseError { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    ///
    /// - If the file doesn't exist, returns `QuizConfig::default()`.
    /// - Otherwise parses and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No quiz config found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one life is granted
    /// - `mid <= high <= 100`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lives == 0 {
            return Err(ConfigError::ValidationError {
                message: "At least one life must be granted".to_string(),
            });
        }

        let GradeThresholds { high, mid } = self.grading;
        if high > 100 {
            return Err(ConfigError::ValidationError {
                message: format!("High threshold {}% exceeds 100%", high),
            });
        }
        if mid > high {
            return Err(ConfigError::ValidationError {
                message: format!("Mid threshold {}% exceeds high threshold {}%", mid, high),
            });
        }

        Ok(())
    }
}
