use std::{future::Future, sync::Arc};

use crate::{
    model::sport::{Schedule, Sport},
    server::{
        data::sport::SportsRepository,
        error::AppError,
        model::sport::ScheduleLookup,
        service::dispatch::TaskDispatcher,
    },
};

/// Sports operations for the HTTP layer.
///
/// Forwards every call to the repository unchanged and provides [`dispatch`],
/// which moves a unit of work off the request onto the bounded task dispatcher.
/// Cloning is cheap; clones share the repository and the dispatcher limits.
///
/// [`dispatch`]: SportsService::dispatch
#[derive(Clone)]
pub struct SportsService {
    repository: Arc<dyn SportsRepository>,
    dispatcher: TaskDispatcher,
}

impl SportsService {
    pub fn new(repository: Arc<dyn SportsRepository>, dispatcher: TaskDispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Runs `task` with a clone of this service on its own tokio task.
    ///
    /// The returned future resolves with the task's value or error. A panic in
    /// the task resolves to `AppError::TaskErr`; it is never raised on the caller.
    ///
    /// # Arguments
    /// - `task` - Unit of work receiving the service it should call
    ///
    /// # Returns
    /// - `Ok(T)` - The task completed successfully
    /// - `Err(AppError::Overloaded)` / `Err(AppError::Timeout(_))` - Rejected or aborted by the dispatcher
    /// - `Err(_)` - The error the task produced
    pub async fn dispatch<T, F, Fut>(&self, task: F) -> Result<T, AppError>
    where
        F: FnOnce(SportsService) -> Fut,
        Fut: Future<Output = Result<T, AppError>> + Send + 'static,
        T: Send + 'static,
    {
        self.dispatcher.run(task(self.clone())).await
    }

    pub async fn get_all(&self) -> Result<Vec<Sport>, AppError> {
        self.repository.get_all().await
    }

    pub async fn get_sport(&self, sport_name: &str) -> Result<Option<Sport>, AppError> {
        self.repository.get_sport(sport_name).await
    }

    pub async fn get_schedules(&self, sport_name: &str) -> Result<ScheduleLookup, AppError> {
        self.repository.get_schedules(sport_name).await
    }

    pub async fn add_sport(&self, sport: Sport) -> Result<(), AppError> {
        let sport_name = sport.sport_name.clone();

        self.repository.add_sport(sport).await?;

        tracing::debug!("Registered sport '{}'", sport_name);

        Ok(())
    }

    pub async fn add_schedule(&self, sport_name: &str, schedule: Schedule) -> Result<(), AppError> {
        self.repository.add_schedule(sport_name, schedule).await
    }

    pub async fn remove_sport(&self, sport_name: &str) -> Result<(), AppError> {
        self.repository.remove_sport(sport_name).await
    }

    pub async fn remove_schedule(
        &self,
        sport_name: &str,
        schedule: Schedule,
    ) -> Result<(), AppError> {
        self.repository.remove_schedule(sport_name, schedule).await
    }
}
