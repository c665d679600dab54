//! YAML run configuration
//!
//! ```yaml
//! platform: Instagram
//! start_year: 2012
//! end_year: 2024
//! seed: 42
//! output_dir: ./out
//! platforms:
//!   - name: Threads
//!     users_base: 200000000
//!     revenue_base: 1.0
//!     specialties: [ai, content]
//!     user_growth: { before: 0.5, after: 0.2, threshold: 2024 }
//! ```
//!
//! Every field is optional. Entries under `platforms` extend the built-in
//! catalog; an entry named like a built-in (or `default`) replaces it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use synthfin_core::config::PlatformCatalog;
use synthfin_core::model::{PlatformConfig, YearRange};

/// Error types for loading a run configuration
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for one generation run, as read from a YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Additional or replacement catalog entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<PlatformConfig>,
}

impl RunConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_saphyr::from_str(yaml)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse run config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize run config: {}", e)))
    }

    /// Load a run configuration from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Reject catalog entries whose seeds or growth rates can't produce a
    /// sensible series
    fn validate(&self) -> Result<(), ConfigError> {
        for platform in &self.platforms {
            if platform.name.trim().is_empty() {
                return Err(ConfigError::Invalid("platform name is empty".to_string()));
            }
            if !(platform.users_base > 0.0 && platform.revenue_base > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "platform {:?} needs positive users_base and revenue_base",
                    platform.name
                )));
            }
            if !platform.user_growth.is_non_negative() || !platform.revenue_growth.is_non_negative()
            {
                return Err(ConfigError::Invalid(format!(
                    "platform {:?} has a negative growth rate",
                    platform.name
                )));
            }
        }
        if let (Some(start), Some(end)) = (self.start_year, self.end_year) {
            YearRange::new(start, end).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(())
    }

    /// The built-in catalog extended with this file's entries
    pub fn catalog(&self) -> PlatformCatalog {
        self.platforms
            .iter()
            .cloned()
            .fold(PlatformCatalog::builtin(), PlatformCatalog::with_platform)
    }

    /// Overlay values from `other`, which wins wherever it is set
    pub fn merge(mut self, other: RunConfig) -> Self {
        self.platform = other.platform.or(self.platform);
        self.start_year = other.start_year.or(self.start_year);
        self.end_year = other.end_year.or(self.end_year);
        self.seed = other.seed.or(self.seed);
        self.output_dir = other.output_dir.or(self.output_dir);
        self.platforms.extend(other.platforms);
        self
    }

    /// Year range, defaulting each missing end to 2010..=2025
    pub fn year_range(&self) -> Result<YearRange, ConfigError> {
        let start = self.start_year.unwrap_or(YearRange::DEFAULT.start());
        let end = self.end_year.unwrap_or(YearRange::DEFAULT.end());
        YearRange::new(start, end).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
