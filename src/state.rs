//! Shared application state for all routes.

use crate::service::TodoService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
    /// Used by the readiness probe. `None` when the service runs without a database.
    pub pool: Option<PgPool>,
}
