use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to prepare the session store table.
    #[error(transparent)]
    Sqlx(#[from] sea_orm::SqlxError),
}
