//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the module CRUD endpoints and the health probe under a
//! single Axum router, with open CORS for the browser editor and a small set
//! of security headers on every response.

pub mod modules;

use axum::Router;
use axum::extract::State;
use axum::http::header::{X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/get-modules", get(modules::list_modules))
        .route("/api/get-module-data/{id}", get(modules::get_module))
        .route("/api/add-new-module", post(modules::create_module))
        .route("/api/load-modules", get(modules::load_modules))
        .route("/healthz", get(healthz))
        .layer(SetResponseHeaderLayer::if_not_present(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(X_FRAME_OPTIONS, HeaderValue::from_static("DENY")))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz(State(state): State<AppState>) -> (StatusCode, String) {
    (StatusCode::OK, format!("ok ({})", state.environment))
}
