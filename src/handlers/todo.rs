//! Todo CRUD handlers: create, list, read, update, delete.

use crate::dto::{CreateTodoRequest, TodoByIdRequest, UpdateTodoRequest};
use crate::error::AppError;
use crate::extractors::{ValidatedJson, ValidatedPath};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.service.create(&req.title).await?;
    Ok(StatusCode::CREATED)
}

/// GET /todos
pub async fn read_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = state.service.read_all().await?;
    Ok((StatusCode::OK, Json(todos)))
}

/// GET /todos/:id
pub async fn read_by_id(
    State(state): State<AppState>,
    ValidatedPath(req): ValidatedPath<TodoByIdRequest>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.service.read_by_id(req.id).await?;
    Ok((StatusCode::OK, Json(todo)))
}

/// PUT /todos/:id
pub async fn update(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<TodoByIdRequest>,
    ValidatedJson(mut req): ValidatedJson<UpdateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.id = path.id;
    state.service.update(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todos/:id
pub async fn delete(
    State(state): State<AppState>,
    ValidatedPath(req): ValidatedPath<TodoByIdRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete(req.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
