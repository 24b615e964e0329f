//! The persisted Todo row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `todos` table. `id` and the timestamps are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
