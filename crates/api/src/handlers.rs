//! Route handlers for the registry API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use depot_registry::PackageRecord;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::AppState;

/// Payload of `POST /packages`.
#[derive(Debug, Deserialize)]
pub struct CreatePackage {
    pub name: String,
    pub url: String,
}

/// Body of `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub async fn status() -> Json<StatusInfo> {
    Json(StatusInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PackageRecord>>, ApiError> {
    Ok(Json(state.registry.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePackage>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    state.registry.create(&payload.name, &payload.url).await?;
    Ok(StatusCode::CREATED)
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PackageRecord>, ApiError> {
    Ok(Json(state.registry.fetch(&name).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.registry.remove(&name).await?;
    Ok(StatusCode::OK)
}

pub async fn search(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<PackageRecord>>, ApiError> {
    Ok(Json(state.registry.search(&name).await?))
}
