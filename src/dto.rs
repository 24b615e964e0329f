//! Typed request objects bound from path parameters and JSON bodies.

use serde::Deserialize;
use validator::{Validate, ValidationError};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(
        length(min = 1, max = 255, message = "title must be between 1 and 255 characters"),
        custom(function = "no_nul")
    )]
    pub title: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Validate)]
pub struct TodoByIdRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,
}

/// Body of `PUT /todos/:id`. `id` comes from the path, so it is skipped when
/// decoding the body and filled in by the handler.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[serde(skip)]
    pub id: i64,
    #[validate(
        length(min = 1, max = 255, message = "title must be between 1 and 255 characters"),
        custom(function = "no_nul")
    )]
    pub title: Option<String>,
    pub done: Option<bool>,
}

/// PostgreSQL text columns cannot store NUL.
fn no_nul(title: &str) -> Result<(), ValidationError> {
    if title.contains('\0') {
        let mut err = ValidationError::new("nul");
        err.message = Some("title must not contain NUL characters".into());
        return Err(err);
    }
    Ok(())
}
