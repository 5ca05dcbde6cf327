//! Core data models for the developer registry.

mod developer;

pub use developer::{Developer, Experience};
