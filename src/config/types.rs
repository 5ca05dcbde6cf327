//! Configuration types for the developer registry.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tax::TaxTable;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8585
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Prefix applied to every route (e.g. "/workintech").
    #[serde(default)]
    pub context_path: String,
}

impl ServerConfig {
    /// Returns the context path without a trailing slash, or `None` when
    /// routes are served at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use developer_registry::config::ServerConfig;
    ///
    /// let mut server = ServerConfig::default();
    /// server.context_path = "/workintech/".to_string();
    /// assert_eq!(server.context_prefix(), Some("/workintech"));
    ///
    /// server.context_path = "/".to_string();
    /// assert_eq!(server.context_prefix(), None);
    /// ```
    pub fn context_prefix(&self) -> Option<&str> {
        let trimmed = self.context_path.trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            context_path: String::new(),
        }
    }
}

/// Application metadata reported by the info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Application name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Application version.
    pub version: String,
}

/// Structure of service.yaml.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServiceFile {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Application metadata.
    pub info: AppInfo,
}

/// Structure of tax_rates.yaml.
///
/// Rates are percentages, one per experience tier.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TaxRateConfig {
    /// Rate for junior developers.
    pub simple: Decimal,
    /// Rate for mid-level developers.
    pub middle: Decimal,
    /// Rate for senior developers.
    pub upper: Decimal,
}

/// The complete service configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    server: ServerConfig,
    info: AppInfo,
    tax_table: TaxTable,
}

impl ServiceConfig {
    /// Creates a new ServiceConfig from its component parts.
    pub fn new(server: ServerConfig, info: AppInfo, tax_table: TaxTable) -> Self {
        Self {
            server,
            info,
            tax_table,
        }
    }

    /// Returns the listener settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns mutable listener settings, for command-line overrides.
    pub fn server_mut(&mut self) -> &mut ServerConfig {
        &mut self.server
    }

    /// Returns the application metadata.
    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    /// Returns the tax table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }
}
