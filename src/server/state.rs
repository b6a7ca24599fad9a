//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use std::sync::Arc;

use crate::server::service::{auth::CredentialStore, sport::SportsService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `SportsService` holds the repository behind an `Arc` and a shared dispatcher
/// - `Arc<CredentialStore>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Sports operations, dispatched onto the bounded task executor.
    pub sports: SportsService,

    /// Users allowed to call the API, loaded once at startup.
    pub credentials: Arc<CredentialStore>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `sports` - Service used by the sport controllers
    /// - `credentials` - Credential store checked by the auth middleware
    pub fn new(sports: SportsService, credentials: Arc<CredentialStore>) -> Self {
        Self {
            sports,
            credentials,
        }
    }
}
