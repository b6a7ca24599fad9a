use std::sync::Arc;

use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::sport::SportRepository,
    error::AppError,
    service::{auth::CredentialStore, dispatch::TaskDispatcher, sport::SportsService},
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr(_))` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session manager layer backed by the application database.
///
/// Sessions live in their own table on the same SQLite pool, created on first
/// start. Cookies are not marked secure since the server speaks plain HTTP.
///
/// # Arguments
/// - `db` - Connected database whose pool stores the sessions
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the router with
/// - `Err(AppError::SqlxErr(_))` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}

/// Loads the credential store named by the configuration.
///
/// # Returns
/// - `Ok(Arc<CredentialStore>)` - Users allowed to call the API
/// - `Err(AppError::IoErr(_))` / `Err(AppError::ConfigErr(_))` - Unreadable or invalid file
pub async fn load_credentials(config: &Config) -> Result<Arc<CredentialStore>, AppError> {
    let credentials = CredentialStore::load(&config.credentials_path).await?;

    if credentials.is_empty() {
        tracing::warn!(
            "No users found in {}, every request to /sports will be rejected",
            config.credentials_path.display()
        );
    }

    Ok(Arc::new(credentials))
}

/// Wires the sports service to the database and the dispatch limits.
pub fn build_sports_service(config: &Config, db: &DatabaseConnection) -> SportsService {
    let repository = SportRepository::new(db.clone());

    SportsService::new(Arc::new(repository), TaskDispatcher::new(config.dispatch))
}
