//! Configuration loading and management for the developer registry.
//!
//! This module loads the listener settings, application info and tax rates
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use developer_registry::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded {}", config.info().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppInfo, ServerConfig, ServiceConfig};
