//! Service routes: liveness, readiness against the employee store, build and API info.

use crate::repository::EMPLOYEE_TABLE;
use crate::service::MAX_TEXT_LENGTH;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const EMPLOYEES_API_PATH: &str = "/api/employees";

#[derive(Serialize)]
struct Status {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

static BUILD: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

#[derive(Serialize)]
struct ServiceInfo {
    #[serde(flatten)]
    build: &'static BuildInfo,
    api: &'static str,
    table: &'static str,
    max_text_length: usize,
}

async fn health() -> Json<Status> {
    Json(Status {
        status: "ok",
        database: None,
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Status>) {
    match state.repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Status {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Status {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn version() -> Json<&'static BuildInfo> {
    Json(&BUILD)
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        build: &BUILD,
        api: EMPLOYEES_API_PATH,
        table: EMPLOYEE_TABLE,
        max_text_length: MAX_TEXT_LENGTH,
    })
}

/// GET /health, /ready, /version, /info.
pub fn service_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(info))
        .with_state(state)
}
