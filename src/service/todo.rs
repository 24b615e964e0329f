use crate::dto::UpdateTodoRequest;
use crate::entity::Todo;
use crate::error::AppError;
use crate::repository::TodoRepository;
use std::sync::Arc;
use tracing::instrument;

/// Business rules between the handlers and the repository. This is the only
/// place storage errors become `AppError`s.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new<R: TodoRepository + 'static>(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, title))]
    pub async fn create(&self, title: &str) -> Result<(), AppError> {
        self.repository.create(title).await.map_err(|e| {
            tracing::error!(error = %e, "error creating todo");
            AppError::Internal
        })
    }

    pub async fn read_all(&self) -> Result<Vec<Todo>, AppError> {
        self.repository.read_all().await.map_err(|e| {
            tracing::error!(error = %e, "error reading todos");
            AppError::Internal
        })
    }

    #[instrument(skip(self))]
    pub async fn read_by_id(&self, id: i64) -> Result<Todo, AppError> {
        match self.repository.read_by_id(id).await {
            Ok(todo) => Ok(todo),
            Err(sqlx::Error::RowNotFound) => Err(AppError::NotFound),
            Err(e) => {
                tracing::error!(error = %e, "error reading todo");
                Err(AppError::Internal)
            }
        }
    }

    /// Fields omitted from the request keep their stored value; the merged row
    /// is then written back whole.
    #[instrument(skip(self, req), fields(id = req.id))]
    pub async fn update(&self, req: UpdateTodoRequest) -> Result<(), AppError> {
        let existing = self.read_by_id(req.id).await?;
        let todo = Todo {
            title: req.title.unwrap_or(existing.title),
            done: req.done.unwrap_or(existing.done),
            ..existing
        };
        self.repository.update(&todo).await.map_err(|e| {
            tracing::error!(error = %e, "error updating todo");
            AppError::Internal
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.read_by_id(id).await?;
        self.repository.delete(id).await.map_err(|e| {
            tracing::error!(error = %e, "error deleting todo");
            AppError::Internal
        })
    }
}
