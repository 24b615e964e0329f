//! Todo CRUD routes.

use crate::handlers::todo::{create, delete, read_all, read_by_id, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(read_all).post(create))
        .route("/todos/:id", get(read_by_id).put(update).delete(delete))
        .with_state(state)
}
