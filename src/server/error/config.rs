use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// A line of the credential file is not a valid `user.<name> = <password>` entry.
    ///
    /// The line itself is left out of the message since it may hold a password.
    #[error("Invalid credential entry on line {line}")]
    InvalidCredentialEntry { line: usize },
}
