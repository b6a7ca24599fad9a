use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    service::dispatch::DispatchLimits,
};

const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
const DEFAULT_SERVER_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,
    pub credentials_path: PathBuf,

    pub server_host: String,
    pub server_port: u16,

    pub dispatch: DispatchLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(AppError::ConfigErr(_))` - A required variable is missing or a value is invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = DispatchLimits::default();

        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            credentials_path: PathBuf::from(required(&lookup, "CREDENTIALS_PATH")?),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: optional(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
            dispatch: DispatchLimits {
                max_in_flight: optional(&lookup, "DISPATCH_MAX_IN_FLIGHT", defaults.max_in_flight)?,
                max_pending: optional(&lookup, "DISPATCH_MAX_PENDING", defaults.max_pending)?,
                timeout: Duration::from_secs(optional(
                    &lookup,
                    "DISPATCH_TIMEOUT_SECS",
                    defaults.timeout.as_secs(),
                )?),
            },
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, ConfigError> {
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
