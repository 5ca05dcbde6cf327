//! HTTP request handlers for the developer registry API.
//!
//! This module contains the handler functions for the developer CRUD
//! endpoints and the management endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::models::Developer;

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Every route served by the registry, relative to the context path.
///
/// Must list the same routes as [`create_router`].
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/developers"),
    ("POST", "/developers"),
    ("GET", "/developers/{id}"),
    ("PUT", "/developers/{id}"),
    ("DELETE", "/developers/{id}"),
    ("GET", "/actuator/health"),
    ("GET", "/actuator/info"),
    ("GET", "/actuator/mappings"),
];

/// Creates the API router with all endpoints, served at the root.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/developers",
            get(list_developers).post(create_developer),
        )
        .route(
            "/developers/:id",
            get(get_developer)
                .put(update_developer)
                .delete(delete_developer),
        )
        .route("/actuator/health", get(health))
        .route("/actuator/info", get(app_info))
        .route("/actuator/mappings", get(mappings))
        .with_state(state)
}

/// Creates the router nested under the configured context path.
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    let router = create_router(state);
    match server.context_prefix() {
        Some(prefix) => Router::new().nest(prefix, router),
        None => router,
    }
}

/// Handler for GET /developers.
async fn list_developers(State(state): State<AppState>) -> Json<Vec<Developer>> {
    let developers = state.store().read().await.list();
    debug!(count = developers.len(), "Listed developers");
    Json(developers)
}

/// Handler for GET /developers/{id}.
///
/// An unknown id yields `200` with a `null` body.
async fn get_developer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Option<Developer>>, ApiErrorResponse> {
    let Path(id) = path?;
    let developer = state.store().read().await.get(id);
    debug!(developer_id = id, found = developer.is_some(), "Fetched developer");
    Ok(Json(developer))
}

/// Handler for POST /developers.
///
/// The submitted salary is gross; the stored and returned salary is net.
async fn create_developer(
    State(state): State<AppState>,
    payload: Result<Json<Developer>, JsonRejection>,
) -> Result<(StatusCode, Json<Developer>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let Json(developer) = payload.inspect_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Rejected developer body"
        );
    })?;

    let gross = developer.salary;
    let stored = state
        .store()
        .write()
        .await
        .create(developer, state.tax_rates());

    info!(
        correlation_id = %correlation_id,
        developer_id = stored.id,
        experience = stored.experience.as_str(),
        gross_salary = %gross,
        net_salary = %stored.salary,
        "Developer created"
    );
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Handler for PUT /developers/{id}.
///
/// Stores the body exactly as given under the path id.
async fn update_developer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Developer>, JsonRejection>,
) -> Result<Json<Developer>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = path?;

    let Json(developer) = payload.inspect_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            developer_id = id,
            error = %rejection.body_text(),
            "Rejected developer body"
        );
    })?;

    if developer.id != id {
        debug!(
            correlation_id = %correlation_id,
            path_id = id,
            body_id = developer.id,
            "Body id differs from path id"
        );
    }

    let stored = state.store().write().await.update(id, developer);
    info!(correlation_id = %correlation_id, developer_id = id, "Developer updated");
    Ok(Json(stored))
}

/// Handler for DELETE /developers/{id}.
///
/// An unknown id yields `200` with a `null` body.
async fn delete_developer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Option<Developer>>, ApiErrorResponse> {
    let Path(id) = path?;
    let removed = state.store().write().await.delete(id);
    info!(developer_id = id, removed = removed.is_some(), "Developer deleted");
    Ok(Json(removed))
}

/// Handler for GET /actuator/health.
async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

/// Handler for GET /actuator/info.
async fn app_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "app": state.info(),
        "started_at": state.started_at(),
    }))
}

/// A single entry of the route listing.
#[derive(Debug, Serialize)]
struct RouteMapping {
    method: &'static str,
    path: &'static str,
}

/// Handler for GET /actuator/mappings.
async fn mappings() -> Json<Vec<RouteMapping>> {
    Json(
        ROUTES
            .iter()
            .map(|&(method, path)| RouteMapping { method, path })
            .collect(),
    )
}
