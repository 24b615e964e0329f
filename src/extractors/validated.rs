//! Decode a JSON body or path parameters into a typed request and run its
//! `validator` rules. Any failure becomes a 400 before the handler runs.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body decoded into `T` and validated.
#[derive(Clone, Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            let message = rejection.body_text();
            tracing::debug!(%message, "rejected request body");
            AppError::Validation(message)
        })?;
        validate(&value)?;
        Ok(ValidatedJson(value))
    }
}

/// Path parameters decoded into `T` and validated.
#[derive(Clone, Debug)]
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await.map_err(|rejection| {
            let message = rejection.body_text();
            tracing::debug!(%message, "rejected path parameters");
            AppError::Validation(message)
        })?;
        validate(&value)?;
        Ok(ValidatedPath(value))
    }
}

fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value.validate().map_err(|e| {
        tracing::debug!(error = %e, "request failed validation");
        AppError::from(e)
    })
}
