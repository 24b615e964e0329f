//! Storage access for todos: the `TodoRepository` trait and its PostgreSQL implementation.

mod postgres;

pub use postgres::PgTodoRepository;

use crate::entity::Todo;
use async_trait::async_trait;

/// Data access for the `todos` table. Errors are raw storage errors; a missing
/// row is reported as `sqlx::Error::RowNotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a new row with `done = false`.
    async fn create(&self, title: &str) -> Result<(), sqlx::Error>;

    /// Every row, ordered by id. Empty when the table is empty.
    async fn read_all(&self) -> Result<Vec<Todo>, sqlx::Error>;

    async fn read_by_id(&self, id: i64) -> Result<Todo, sqlx::Error>;

    /// Replace title and done of the row identified by `todo.id`.
    async fn update(&self, todo: &Todo) -> Result<(), sqlx::Error>;

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
}
