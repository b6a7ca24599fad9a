use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// JSON request body decoded regardless of the request's `Content-Type`.
///
/// Unlike `axum::Json`, a missing or different content type is accepted; only
/// the bytes decide. Malformed JSON, trailing content after the value and
/// unreadable bodies are rejected with `AppError::MalformedBody`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::MalformedBody(err.to_string()))?;

        Ok(Self(value))
    }
}
