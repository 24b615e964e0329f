//! Todo backend: CRUD REST API for a single `Todo` entity on PostgreSQL.

pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use entity::Todo;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use repository::{PgTodoRepository, TodoRepository};
pub use routes::{app, common_routes_with_ready, todo_routes};
pub use service::TodoService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
