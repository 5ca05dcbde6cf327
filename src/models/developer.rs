//! Developer model and related types.
//!
//! This module defines the Developer record and the Experience enum that
//! selects the tax tier applied to a developer's salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A developer's experience level.
///
/// Only these three values are accepted on the wire; anything else fails
/// deserialization instead of falling back to a default tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Experience {
    /// Junior developer, taxed at the simple rate.
    Junior,
    /// Mid-level developer, taxed at the middle rate.
    Mid,
    /// Senior developer, taxed at the upper rate.
    Senior,
}

impl Experience {
    /// Returns the wire name of the experience level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Junior => "JUNIOR",
            Experience::Mid => "MID",
            Experience::Senior => "SENIOR",
        }
    }
}

/// A developer record held by the registry.
///
/// After creation `salary` is the net value; the gross is not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    /// Unique identifier, used as the store key.
    pub id: i32,
    /// The developer's name.
    pub name: String,
    /// Salary, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    /// The developer's experience level.
    pub experience: Experience,
}

impl Developer {
    /// Creates a developer with an explicit experience level.
    ///
    /// # Examples
    ///
    /// ```
    /// use developer_registry::models::{Developer, Experience};
    /// use rust_decimal::Decimal;
    ///
    /// let dev = Developer::new(1, "John Doe", Decimal::new(1000, 0), Experience::Junior);
    /// assert_eq!(dev.id, 1);
    /// assert_eq!(dev.experience, Experience::Junior);
    /// ```
    pub fn new(id: i32, name: impl Into<String>, salary: Decimal, experience: Experience) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            experience,
        }
    }

    /// Creates a junior developer.
    pub fn junior(id: i32, name: impl Into<String>, salary: Decimal) -> Self {
        Self::new(id, name, salary, Experience::Junior)
    }

    /// Creates a mid-level developer.
    pub fn mid(id: i32, name: impl Into<String>, salary: Decimal) -> Self {
        Self::new(id, name, salary, Experience::Mid)
    }

    /// Creates a senior developer.
    pub fn senior(id: i32, name: impl Into<String>, salary: Decimal) -> Self {
        Self::new(id, name, salary, Experience::Senior)
    }
}
