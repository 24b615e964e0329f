//! Server: loads configuration, prepares the database, and serves the todo API.

use todo_backend::{
    app, apply_migrations, connect, ensure_database_exists, AppState, Config, PgTodoRepository,
    TodoService,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    ensure_database_exists(&config.database).await?;
    let pool = connect(config.database.clone(), config.max_connections).await?;
    apply_migrations(&pool).await?;

    let state = AppState {
        service: TodoService::new(PgTodoRepository::new(pool.clone())),
        pool: Some(pool),
    };

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, config.body_limit)).await?;
    Ok(())
}
