//! Schema for the `todos` table. Idempotent; run once at startup.

use sqlx::PgPool;

const CREATE_TODOS: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id BIGSERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL CHECK (char_length(title) >= 1),
    done BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

pub async fn apply_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TODOS).execute(pool).await?;
    tracing::info!("todos table ready");
    Ok(())
}
