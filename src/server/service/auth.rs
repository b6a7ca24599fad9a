//! Credential store backing HTTP Basic authentication.
//!
//! Users are read once at startup from a properties file with one entry per
//! user:
//!
//! ```text
//! # comment
//! user.alice = secret,admin
//! user.bob = hunter2
//! ```
//!
//! Everything after the first comma of a value is a role list. Lines starting
//! with `#` or `!`, blank lines and `role.*` declarations are ignored.

use std::{collections::HashMap, path::Path};

use crate::server::error::{config::ConfigError, AppError};

const USER_PREFIX: &str = "user.";

/// A registered user's password and roles.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UserEntry {
    password: String,
    roles: Vec<String>,
}

/// Immutable table of users allowed to call the API.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, UserEntry>,
}

impl CredentialStore {
    /// Reads and parses a credential file.
    ///
    /// # Arguments
    /// - `path` - Location of the properties file
    ///
    /// # Returns
    /// - `Ok(CredentialStore)` - Parsed users
    /// - `Err(AppError::IoErr(_))` - The file could not be read
    /// - `Err(AppError::ConfigErr(_))` - A line is not a valid entry
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let contents = tokio::fs::read_to_string(path).await?;

        let store = Self::parse(&contents)?;

        tracing::info!(
            "Loaded {} user(s) from {}",
            store.users.len(),
            path.display()
        );

        Ok(store)
    }

    /// Parses credential file contents.
    ///
    /// # Returns
    /// - `Ok(CredentialStore)` - Parsed users
    /// - `Err(AppError::ConfigErr(ConfigError::InvalidCredentialEntry { .. }))` - A line has no `=` or an empty user name
    pub fn parse(contents: &str) -> Result<Self, AppError> {
        let mut users = HashMap::new();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(invalid_entry(index));
            };

            let Some(name) = key.trim().strip_prefix(USER_PREFIX) else {
                continue;
            };

            let name = name.trim();
            if name.is_empty() {
                return Err(invalid_entry(index));
            }

            let mut parts = value.split(',').map(str::trim);
            let password = parts.next().unwrap_or_default().to_string();
            let roles = parts
                .filter(|role| !role.is_empty())
                .map(str::to_string)
                .collect();

            users.insert(name.to_string(), UserEntry { password, roles });
        }

        Ok(Self { users })
    }

    /// Checks a user name and password pair.
    pub fn verify(&self, user: &str, password: &str) -> bool {
        self.users
            .get(user)
            .is_some_and(|entry| entry.password == password)
    }

    /// Roles granted to a user, empty when the user is unknown.
    pub fn roles(&self, user: &str) -> &[String] {
        self.users
            .get(user)
            .map(|entry| entry.roles.as_slice())
            .unwrap_or_default()
    }

    /// Whether a user with this name exists.
    pub fn contains(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn invalid_entry(index: usize) -> AppError {
    ConfigError::InvalidCredentialEntry { line: index + 1 }.into()
}
