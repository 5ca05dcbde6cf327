//! HTTP API module for the developer registry.
//!
//! This module provides the REST endpoints for listing, fetching, creating,
//! updating and deleting developers, plus health, info and route listings.

mod handlers;
mod response;
mod state;

pub use handlers::{create_app, create_router, ROUTES};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
