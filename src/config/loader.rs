//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{ServiceError, ServiceResult};
use crate::tax::TaxTable;

use super::types::{AppInfo, ServerConfig, ServiceConfig, ServiceFile, TaxRateConfig};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── service.yaml     # Server settings and application info
/// └── tax_rates.yaml   # Tax rate per experience tier
/// ```
///
/// # Example
///
/// ```no_run
/// use developer_registry::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Serving {} on port {}", loader.info().name, loader.server().port);
/// # Ok::<(), developer_registry::error::ServiceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing, contains invalid YAML, has a
    /// tax rate outside 0 to 100, or has a context path without a leading
    /// slash.
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();

        let service = Self::load_yaml::<ServiceFile>(&path.join("service.yaml"))?;
        validate_context_path(&service.server)?;

        let rates = Self::load_yaml::<TaxRateConfig>(&path.join("tax_rates.yaml"))?;
        let tax_table = TaxTable::new(rates.simple, rates.middle, rates.upper)?;

        Ok(Self {
            config: ServiceConfig::new(service.server, service.info, tax_table),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ServiceResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ServiceError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }

    /// Returns the listener settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Returns the application metadata.
    pub fn info(&self) -> &AppInfo {
        self.config.info()
    }

    /// Returns the tax table.
    pub fn tax_table(&self) -> &TaxTable {
        self.config.tax_table()
    }
}

fn validate_context_path(server: &ServerConfig) -> ServiceResult<()> {
    let path = &server.context_path;
    if !path.is_empty() && !path.starts_with('/') {
        return Err(ServiceError::InvalidContextPath { path: path.clone() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config"
    }

    /// Writes the given files into a fresh directory under the system temp dir.
    fn write_config_dir(name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "developer-registry-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
        dir
    }

    const SERVICE_YAML: &str = r#"
server:
  port: 9090
  context_path: /api
info:
  name: test
  description: test service
  version: 0.0.1
"#;

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.server().port, 8585);
        assert_eq!(loader.server().context_path, "/workintech");
    }

    #[test]
    fn test_app_info_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert!(!loader.info().name.is_empty());
        assert!(!loader.info().description.is_empty());
        assert!(!loader.info().version.is_empty());
    }

    #[test]
    fn test_tax_rates_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let table = loader.tax_table();

        assert_eq!(table.simple_rate(), Decimal::new(15, 0));
        assert_eq!(table.middle_rate(), Decimal::new(25, 0));
        assert_eq!(table.upper_rate(), Decimal::new(35, 0));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(ServiceError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_tax_rates_file_returns_error() {
        let dir = write_config_dir("missing-rates", &[("service.yaml", SERVICE_YAML)]);

        match ConfigLoader::load(&dir) {
            Err(ServiceError::ConfigNotFound { path }) => {
                assert!(path.contains("tax_rates.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config_dir(
            "bad-yaml",
            &[
                ("service.yaml", SERVICE_YAML),
                ("tax_rates.yaml", "simple: [not, a, number"),
            ],
        );

        match ConfigLoader::load(&dir) {
            Err(ServiceError::ConfigParseError { path, .. }) => {
                assert!(path.contains("tax_rates.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rate_is_rejected() {
        let dir = write_config_dir(
            "bad-rate",
            &[
                ("service.yaml", SERVICE_YAML),
                ("tax_rates.yaml", "simple: 15\nmiddle: 125\nupper: 35\n"),
            ],
        );

        match ConfigLoader::load(&dir) {
            Err(ServiceError::InvalidTaxRate { tier, .. }) => assert_eq!(tier, "middle"),
            other => panic!("Expected InvalidTaxRate, got {:?}", other),
        }
    }

    #[test]
    fn test_context_path_without_slash_is_rejected() {
        let service = SERVICE_YAML.replace("/api", "api");
        let dir = write_config_dir(
            "bad-context",
            &[
                ("service.yaml", service.as_str()),
                ("tax_rates.yaml", "simple: 15\nmiddle: 25\nupper: 35\n"),
            ],
        );

        match ConfigLoader::load(&dir) {
            Err(ServiceError::InvalidContextPath { path }) => assert_eq!(path, "api"),
            other => panic!("Expected InvalidContextPath, got {:?}", other),
        }
    }

    #[test]
    fn test_server_section_defaults() {
        let dir = write_config_dir(
            "defaults",
            &[
                (
                    "service.yaml",
                    "info:\n  name: n\n  description: d\n  version: v\n",
                ),
                ("tax_rates.yaml", "simple: 12.5\nmiddle: 20\nupper: 30\n"),
            ],
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.server(), &ServerConfig::default());
        assert_eq!(loader.server().bind_address(), "0.0.0.0:8585");
        assert_eq!(loader.tax_table().simple_rate(), Decimal::new(125, 1));
    }
}
