//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` as the fallback mapping for API endpoints. Controllers match the
//! domain variants (`DuplicateKey`, `InvalidOperation`) themselves when a route
//! needs a route-specific status or message.

pub mod auth;
pub mod config;

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates every failure that can occur while serving a request. Most
/// infrastructure variants use `#[from]` for automatic conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for the 401 challenge.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// A stored document could not be converted to or from the domain model.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// IO failure, such as reading the credential file or binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A dispatched task panicked or was cancelled before producing a result.
    #[error(transparent)]
    TaskErr(#[from] tokio::task::JoinError),

    /// An insert would violate the unique sport name.
    ///
    /// # Fields
    /// - Name of the sport that is already registered
    #[error("sport '{0}' is already registered")]
    DuplicateKey(String),

    /// A mutation referenced a sport or schedule that does not allow it, either
    /// because it is missing or because the schedule is already present.
    ///
    /// # Fields
    /// - Description of the rejected operation
    #[error("{0}")]
    InvalidOperation(String),

    /// A required path parameter or body field was absent or blank.
    ///
    /// # Fields
    /// - Name of the missing parameter
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// The request body could not be decoded into the expected type.
    ///
    /// # Fields
    /// - Description of the decoding failure
    #[error("{0}")]
    MalformedBody(String),

    /// A dispatched task exceeded its deadline and was aborted.
    #[error("task did not complete within {0:?}")]
    Timeout(Duration),

    /// The dispatcher backlog is full.
    #[error("too many pending requests")]
    Overloaded,

    /// Internal server error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Bodies are plain text holding the error description.
///
/// # Returns
/// - 400 Bad Request - For validation failures and `DuplicateKey`
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `InvalidOperation`
/// - 503 Service Unavailable - For `Overloaded`
/// - 504 Gateway Timeout - For `Timeout`
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::MissingParameter(_) | Self::MalformedBody(_) | Self::DuplicateKey(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Self::InvalidOperation(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::Overloaded => {
                tracing::warn!("Rejected request: {}", self);
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string()).into_response()
            }
            Self::Timeout(_) => {
                tracing::warn!("Request failed: {}", self);
                (StatusCode::GATEWAY_TIMEOUT, self.to_string()).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns its description as the response body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
