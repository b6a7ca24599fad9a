use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    service::auth::CredentialStore,
    state::AppState,
};

/// User name and password decoded from an HTTP Basic `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl BasicCredentials {
    /// Decodes a `Basic <base64(user:password)>` header value.
    ///
    /// The scheme name is matched case-insensitively. The password may contain
    /// colons; only the first one separates it from the user name.
    ///
    /// # Returns
    /// - `Ok(BasicCredentials)` - The decoded pair
    /// - `Err(AuthError::MalformedAuthorization)` - Wrong scheme, invalid base64 or UTF-8, or no colon
    pub fn from_header(value: &HeaderValue) -> Result<Self, AuthError> {
        let value = value
            .to_str()
            .map_err(|_| AuthError::MalformedAuthorization)?;

        let Some((scheme, encoded)) = value.trim().split_once(' ') else {
            return Err(AuthError::MalformedAuthorization);
        };
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::MalformedAuthorization);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::MalformedAuthorization)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedAuthorization)?;

        let Some((user, password)) = decoded.split_once(':') else {
            return Err(AuthError::MalformedAuthorization);
        };

        Ok(Self {
            user: user.to_string(),
            password: password.to_string(),
        })
    }
}

/// Checks that a request comes from a known user.
///
/// A user already recorded in the session is accepted as long as the credential
/// store still knows them. Otherwise the request must carry valid Basic
/// credentials, and the user is then recorded in the session so later requests
/// can rely on the session cookie alone.
pub struct AuthGuard<'a> {
    credentials: &'a CredentialStore,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(credentials: &'a CredentialStore, session: &'a Session) -> Self {
        Self {
            credentials,
            session,
        }
    }

    /// Authenticates the request.
    ///
    /// # Arguments
    /// - `headers` - Request headers, consulted for `Authorization` when the session has no user
    ///
    /// # Returns
    /// - `Ok(String)` - Name of the authenticated user
    /// - `Err(AppError::AuthErr(_))` - No usable session and missing, malformed or rejected credentials
    /// - `Err(AppError::SessionErr(_))` - The session could not be read or written
    pub async fn require(&self, headers: &HeaderMap) -> Result<String, AppError> {
        let auth_session = AuthSession::new(self.session);

        if let Some(user) = auth_session.get_user().await? {
            if self.credentials.contains(&user) {
                return Ok(user);
            }

            tracing::debug!("Session user {} is no longer registered", user);
            auth_session.clear().await;
        }

        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingCredentials.into());
        };

        let credentials = BasicCredentials::from_header(value)?;

        if !self
            .credentials
            .verify(&credentials.user, &credentials.password)
        {
            return Err(AuthError::InvalidCredentials(credentials.user).into());
        }

        auth_session.set_user(&credentials.user).await?;

        tracing::debug!(
            "Authenticated {} with roles {:?}",
            credentials.user,
            self.credentials.roles(&credentials.user)
        );

        Ok(credentials.user)
    }
}

/// Middleware rejecting unauthenticated requests before they reach a handler.
///
/// Applied with `axum::middleware::from_fn_with_state` as a route layer, inside
/// the session manager layer.
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    AuthGuard::new(&state.credentials, &session)
        .require(request.headers())
        .await?;

    Ok(next.run(request).await)
}
