//! In-memory `TodoRepository` and request helpers shared by the HTTP tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{self, Request},
    response::Response,
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use todo_backend::{app, AppState, Todo, TodoRepository, TodoService};
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// Behaves like the PostgreSQL repository: sequential ids, `RowNotFound` for missing rows.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    inner: Arc<RwLock<Inner>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryRepository {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TodoRepository for MemoryRepository {
    async fn create(&self, title: &str) -> Result<(), sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: inner.next_id,
            title: title.to_string(),
            done: false,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(todo.id, todo);
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn read_by_id(&self, id: i64) -> Result<Todo, sqlx::Error> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn update(&self, todo: &Todo) -> Result<(), sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&todo.id).ok_or(sqlx::Error::RowNotFound)?;
        row.title = todo.title.clone();
        row.done = todo.done;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(sqlx::Error::RowNotFound)
    }
}

/// Every call fails the way a lost database connection does.
pub struct BrokenRepository;

#[async_trait]
impl TodoRepository for BrokenRepository {
    async fn create(&self, _title: &str) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn read_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn read_by_id(&self, _id: i64) -> Result<Todo, sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn update(&self, _todo: &Todo) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }

    async fn delete(&self, _id: i64) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolClosed)
    }
}

pub fn router<R: TodoRepository + 'static>(repository: R) -> Router {
    let state = AppState {
        service: TodoService::new(repository),
        pool: None,
    };
    app(state, 64 * 1024)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response) -> axum::body::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
