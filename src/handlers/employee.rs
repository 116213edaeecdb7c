//! Employee handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::EmployeeFields;
use crate::response::{created, ok};
use crate::service::EmployeeService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = EmployeeService::list(state.repo.as_ref()).await?;
    Ok(ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<EmployeeFields>,
) -> Result<impl IntoResponse, AppError> {
    let row = EmployeeService::create(state.repo.as_ref(), body).await?;
    Ok(created(row))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = EmployeeService::get(state.repo.as_ref(), id).await?;
    Ok(ok(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<EmployeeFields>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = EmployeeService::update(state.repo.as_ref(), id, body).await?;
    Ok(ok(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    EmployeeService::delete(state.repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
