//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration and record seed files from YAML.

use std::fs;
use std::path::Path;

use crate::error::{DashboardError, DashboardResult};
use crate::models::EmployeeRecord;

use super::types::DashboardConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 8080
/// store:
///   kind: sqlite          # or: memory
///   path: employees.db    # memory stores take an optional `seed:` file instead
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_dashboard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dashboard.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address());
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DashboardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let config = Self::load_yaml::<DashboardConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Loads a YAML list of employee records.
    ///
    /// Every record is validated against the domain constraints; the first
    /// invalid record is reported as a `ConfigParseError`.
    pub fn load_seed<P: AsRef<Path>>(path: P) -> DashboardResult<Vec<EmployeeRecord>> {
        let path = path.as_ref();
        let records = Self::load_yaml::<Vec<EmployeeRecord>>(path)?;

        for record in &records {
            record
                .validate()
                .map_err(|e| DashboardError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("employee {}: {}", record.employee_number, e),
                })?;
        }

        Ok(records)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DashboardResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DashboardError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Returns the loaded configuration, consuming the loader.
    pub fn into_config(self) -> DashboardConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/dashboard.yaml"
    }

    fn seed_path() -> &'static str {
        "./config/seed.yaml"
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.store,
            StoreConfig::Memory {
                seed: Some(PathBuf::from("./config/seed.yaml"))
            }
        );
    }

    #[test]
    fn test_load_bundled_seed() {
        let records = ConfigLoader::load_seed(seed_path()).unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.validate().is_ok()));
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let path = write_temp("empty.yaml", "{}\n");
        let config = ConfigLoader::load(&path).unwrap().into_config();
        fs::remove_file(&path).unwrap();

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(
            config.store,
            StoreConfig::Sqlite {
                path: PathBuf::from("employees.db")
            }
        );
    }

    #[test]
    fn test_sqlite_store_section() {
        let path = write_temp(
            "sqlite.yaml",
            "server:\n  port: 9000\nstore:\n  kind: sqlite\n  path: /var/lib/hr/employees.db\n",
        );
        let config = ConfigLoader::load(&path).unwrap().into_config();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.store,
            StoreConfig::Sqlite {
                path: PathBuf::from("/var/lib/hr/employees.db")
            }
        );
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/dashboard.yaml") {
            Err(DashboardError::ConfigNotFound { path }) => {
                assert!(path.contains("dashboard.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_store_kind_returns_parse_error() {
        let path = write_temp("bad.yaml", "store:\n  kind: postgres\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DashboardError::ConfigParseError { .. })));
    }

    #[test]
    fn test_seed_with_invalid_record_is_rejected() {
        let path = write_temp(
            "seed.yaml",
            "- employee_number: 1\n  age: 70\n  department: Sales\n  job_role: Manager\n  \
             monthly_income: 5000\n  performance_rating: 3\n  attrition: \"No\"\n",
        );
        let result = ConfigLoader::load_seed(&path);
        fs::remove_file(&path).unwrap();

        match result {
            Err(DashboardError::ConfigParseError { message, .. }) => {
                assert!(message.contains("employee 1"));
                assert!(message.contains("age"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
