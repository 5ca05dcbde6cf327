//! Developer Registry
//!
//! This crate provides an in-memory registry of developer records served
//! over HTTP. Each developer carries an experience level that selects the
//! tax rate used to turn a submitted gross salary into the stored net salary.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tax;
