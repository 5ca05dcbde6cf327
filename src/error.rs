//! Error types for the developer registry.
//!
//! Request handling itself never fails at the business level (absent ids
//! resolve to `null`), so these errors cover configuration and startup.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the developer registry.
///
/// # Example
///
/// ```
/// use developer_registry::error::ServiceError;
///
/// let error = ServiceError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configured tax rate is not a percentage between 0 and 100.
    #[error("Invalid tax rate for tier '{tier}': {rate} (expected 0 to 100)")]
    InvalidTaxRate {
        /// The tier name (simple, middle or upper).
        tier: String,
        /// The offending rate.
        rate: Decimal,
    },

    /// The configured context path does not start with a slash.
    #[error("Invalid context path '{path}': must be empty or start with '/'")]
    InvalidContextPath {
        /// The configured path.
        path: String,
    },
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
