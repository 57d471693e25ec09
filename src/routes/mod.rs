//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the two surfaces of the dashboard under a single Axum
//! router: the embedded page at `/` and the submit endpoint at `/api/patrol`.
//! Everything else is a liveness probe.

pub mod patrol;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(patrol::dashboard))
        .route("/api/patrol", post(patrol::submit_patrol))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
