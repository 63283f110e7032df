//! Module CRUD routes.
//!
//! Every response body is an [`ApiResponse`] envelope whose `status` matches
//! the HTTP status line, except the legacy `/api/load-modules` listing which
//! keeps its older `{status, mods}` shape for existing game clients.

#[cfg(test)]
#[path = "modules_test.rs"]
mod modules_test;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{ApiResponse, CreatedModule, ModuleRecord, ModuleSummary};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::services::module::ModuleError;
use crate::state::AppState;

pub type ApiError = (StatusCode, Json<ApiResponse<()>>);
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// Name and type of one module, as served by the legacy listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDigest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyModuleList {
    pub status: u16,
    pub mods: Vec<ModuleDigest>,
}

fn ok<T>(status: StatusCode, data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (status, Json(ApiResponse::ok(status.as_u16(), data)))
}

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ApiResponse::error(status.as_u16(), message)))
}

pub(crate) fn module_error_response(err: ModuleError) -> ApiError {
    match err {
        ModuleError::NotFound(_) => api_error(StatusCode::NOT_FOUND, err.to_string()),
        ModuleError::Database(_) | ModuleError::Serialization(_) => {
            error!(error = %err, "module store failure");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

/// `GET /api/get-modules` — list every module as `{id, name, type}`.
pub async fn list_modules(State(state): State<AppState>) -> ApiResult<Vec<ModuleSummary>> {
    let list = state.store.list().await.map_err(module_error_response)?;
    info!(count = list.len(), "listed modules");
    Ok(ok(StatusCode::OK, list))
}

/// `GET /api/get-module-data/{id}` — one full module record.
pub async fn get_module(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<ModuleRecord> {
    let record = state.store.get(&id).await.map_err(module_error_response)?;
    info!(%id, name = %record.name, "serving module data");
    Ok(ok(StatusCode::OK, record))
}

/// `POST /api/add-new-module` — store a module record and return its id.
pub async fn create_module(
    State(state): State<AppState>,
    body: Result<Json<ModuleRecord>, JsonRejection>,
) -> ApiResult<CreatedModule> {
    let Json(record) = body.map_err(|rejection| api_error(rejection.status(), rejection.body_text()))?;
    let id = state.store.create(&record).await.map_err(module_error_response)?;
    Ok(ok(StatusCode::CREATED, CreatedModule { id }))
}

/// `GET /api/load-modules` — legacy `{status, mods: [{name, type}]}` listing.
pub async fn load_modules(State(state): State<AppState>) -> Result<Json<LegacyModuleList>, ApiError> {
    let list = state.store.list().await.map_err(module_error_response)?;
    let mods = list
        .into_iter()
        .map(|summary| ModuleDigest { name: summary.name, kind: summary.kind })
        .collect();
    Ok(Json(LegacyModuleList { status: StatusCode::OK.as_u16(), mods }))
}
