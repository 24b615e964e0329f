//! `TodoRepository` over a PostgreSQL pool.

use super::TodoRepository;
use crate::entity::Todo;
use async_trait::async_trait;
use sqlx::PgPool;

const INSERT: &str = "INSERT INTO todos (title) VALUES ($1)";
const SELECT_ALL: &str = "SELECT id, title, done, created_at, updated_at FROM todos ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, title, done, created_at, updated_at FROM todos WHERE id = $1";
const UPDATE: &str = "UPDATE todos SET title = $2, done = $3, updated_at = NOW() WHERE id = $1";
const DELETE: &str = "DELETE FROM todos WHERE id = $1";

#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a zero-row mutation onto the same error a missing SELECT produces.
fn require_row(rows_affected: u64) -> Result<(), sqlx::Error> {
    if rows_affected == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn create(&self, title: &str) -> Result<(), sqlx::Error> {
        tracing::debug!(sql = %INSERT, title = %title, "query");
        sqlx::query(INSERT).bind(title).execute(&self.pool).await?;
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        sqlx::query_as::<_, Todo>(SELECT_ALL).fetch_all(&self.pool).await
    }

    async fn read_by_id(&self, id: i64) -> Result<Todo, sqlx::Error> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        sqlx::query_as::<_, Todo>(SELECT_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, todo: &Todo) -> Result<(), sqlx::Error> {
        tracing::debug!(sql = %UPDATE, id = todo.id, "query");
        let result = sqlx::query(UPDATE)
            .bind(todo.id)
            .bind(&todo.title)
            .bind(todo.done)
            .execute(&self.pool)
            .await?;
        require_row(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        tracing::debug!(sql = %DELETE, id, "query");
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        require_row(result.rows_affected())
    }
}
