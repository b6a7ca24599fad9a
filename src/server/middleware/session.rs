//! Type-safe session management wrappers.
//!
//! `AuthSession` is the only view of the session the API uses. It keeps the
//! session key in one place and exposes typed accessors for the authenticated
//! user so a Basic login is remembered across requests through the session
//! cookie.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER: &str = "auth:user";

/// Authentication session management.
///
/// Handles the authenticated user's name and the session lifecycle.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated user's name in the session.
    ///
    /// # Returns
    /// - `Ok(())` - User successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER, user.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the authenticated user's name from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_USER).await?)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
