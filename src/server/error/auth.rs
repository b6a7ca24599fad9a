use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Challenge sent with every 401 response.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"sports\"";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried neither an authenticated session nor an Authorization header.
    #[error("Request is missing credentials")]
    MissingCredentials,

    /// Authorization header is present but is not a decodable Basic credential.
    #[error("Authorization header is not a valid Basic credential")]
    MalformedAuthorization,

    /// Credentials do not match any entry of the credential store.
    ///
    /// # Fields
    /// - The username that failed to authenticate
    #[error("Invalid credentials for user {0}")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant yields 401 Unauthorized with a Basic challenge so clients can
/// retry with credentials. The specific cause is logged at debug level and kept
/// out of the response body.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, BASIC_CHALLENGE)],
            "Unauthorized",
        )
            .into_response()
    }
}
