//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{StatutoryConfig, StatutoryMetadata, StatutoryRateSet};

/// Loads and provides access to statutory rate configuration.
///
/// The `ConfigLoader` reads YAML files from a directory and exposes the
/// effective-dated rate sets used by payroll calculations.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/kr/
/// ├── statutory.yaml       # Rate table metadata
/// └── rates/
///     └── 2025-01-01.yaml  # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kr").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
/// let rates = loader.config().rate_set_for(date).unwrap();
/// println!("Minimum wage: {}", rates.minimum_wage_monthly);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/kr")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("statutory.yaml");
        let metadata = Self::load_yaml::<StatutoryMetadata>(&metadata_path)?;

        let rates_dir = path.join("rates");
        let rate_sets = Self::load_rate_sets(&rates_dir)?;

        Ok(Self {
            config: StatutoryConfig::new(metadata, rate_sets),
        })
    }

    /// Returns the loaded statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
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

    /// Loads all rate-set files from the rates directory.
    fn load_rate_sets(rates_dir: &Path) -> EngineResult<Vec<StatutoryRateSet>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rate_sets = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;
            let file_path = entry.path();

            if file_path.extension().and_then(|e| e.to_str()) == Some("yaml") {
                rate_sets.push(Self::load_yaml::<StatutoryRateSet>(&file_path)?);
            }
        }

        if rate_sets.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        Ok(rate_sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/config/dir");

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("statutory.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_shipped_reference_config() {
        let loader = ConfigLoader::load("./config/kr").unwrap();
        let config = loader.config();

        assert!(!config.rate_sets().is_empty());
        assert_eq!(config.metadata().version, "2025");
    }

    #[test]
    fn test_shipped_rate_set_resolves_for_2025() {
        let loader = ConfigLoader::load("./config/kr").unwrap();
        let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let rates = loader.config().rate_set_for(date).unwrap();

        assert_eq!(
            rates.minimum_wage_monthly,
            rust_decimal::Decimal::from(2_156_880)
        );
    }
}
