//! Application state for the developer registry API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::config::{AppInfo, ServiceConfig};
use crate::store::DeveloperStore;
use crate::tax::TaxRates;

/// Shared application state.
///
/// Holds the developer store behind a lock so each request sees an atomic
/// read or write, plus the injected tax rates and application metadata.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<DeveloperStore>>,
    tax_rates: Arc<dyn TaxRates + Send + Sync>,
    info: Arc<AppInfo>,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates a state with an empty store.
    pub fn new<R>(tax_rates: R, info: AppInfo) -> Self
    where
        R: TaxRates + Send + Sync + 'static,
    {
        Self {
            store: Arc::new(RwLock::new(DeveloperStore::new())),
            tax_rates: Arc::new(tax_rates),
            info: Arc::new(info),
            started_at: Utc::now(),
        }
    }

    /// Creates a state from loaded configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(*config.tax_table(), config.info().clone())
    }

    /// Returns the locked developer store.
    pub fn store(&self) -> &RwLock<DeveloperStore> {
        &self.store
    }

    /// Returns the tax rates applied on creation.
    pub fn tax_rates(&self) -> &(dyn TaxRates + Send + Sync) {
        self.tax_rates.as_ref()
    }

    /// Returns the application metadata.
    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    /// Returns the time the state was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
