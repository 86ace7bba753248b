use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Naming conventions the analyzer keys on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Prefix that marks a function as a test
    pub test_prefix: String,

    /// Key holding the label of a table entry
    pub name_field: String,

    /// Variable the tested function's result is assigned to
    pub result_variable: String,

    /// Suffix of test files, replaced to find the implementation file
    pub test_suffix: String,

    /// Suffix of the implementation file
    pub implementation_suffix: String,

    /// Treat `func (s *Suite) TestX()` methods as test functions too
    pub include_methods: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            test_prefix: "Test".to_string(),
            name_field: "name".to_string(),
            result_variable: "got".to_string(),
            test_suffix: "_test.go".to_string(),
            implementation_suffix: ".go".to_string(),
            include_methods: true,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file; unset keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AnalysisError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to read config file: {}", e),
        })?;

        let config = Self::from_toml(&content).map_err(|message| AnalysisError::Config {
            path: path.to_path_buf(),
            message,
        })?;

        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        let config: AnalyzerConfig =
            toml::from_str(content).map_err(|e| format!("Failed to parse config file: {}", e))?;
        if config.test_suffix.is_empty() {
            return Err("test_suffix must not be empty".to_string());
        }
        Ok(config)
    }
}
