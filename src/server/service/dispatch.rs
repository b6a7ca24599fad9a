//! Bounded executor for off-loading domain work from request handlers.
//!
//! Every unit of work runs on its own tokio task. At most `max_in_flight` tasks
//! run at once and at most `max_pending` callers wait for a free slot; further
//! callers are rejected with `AppError::Overloaded`. A task running longer than
//! `timeout` is aborted and its caller receives `AppError::Timeout`.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::server::error::AppError;

/// Limits applied by [`TaskDispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchLimits {
    pub max_in_flight: usize,
    pub max_pending: usize,
    pub timeout: Duration,
}

impl Default for DispatchLimits {
    fn default() -> Self {
        Self {
            max_in_flight: 64,
            max_pending: 256,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Cloneable handle to a shared bounded executor.
#[derive(Clone)]
pub struct TaskDispatcher {
    slots: Arc<Semaphore>,
    pending: Arc<AtomicUsize>,
    limits: DispatchLimits,
}

impl TaskDispatcher {
    pub fn new(limits: DispatchLimits) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(limits.max_in_flight)),
            pending: Arc::new(AtomicUsize::new(0)),
            limits,
        }
    }

    /// Number of tasks that could start right now without waiting.
    pub fn available_slots(&self) -> usize {
        self.slots.available_permits()
    }

    /// Runs `task` on a separate tokio task and resolves with its outcome.
    ///
    /// Errors returned by the task, and panics inside it, are delivered through
    /// the returned future and never raised on the caller's stack.
    ///
    /// # Returns
    /// - `Ok(T)` - The task completed successfully
    /// - `Err(AppError::Overloaded)` - No slot was free and the backlog is full
    /// - `Err(AppError::Timeout(_))` - The task exceeded the deadline and was aborted
    /// - `Err(AppError::TaskErr(_))` - The task panicked
    /// - `Err(_)` - Any error produced by the task itself
    pub async fn run<T, Fut>(&self, task: Fut) -> Result<T, AppError>
    where
        Fut: Future<Output = Result<T, AppError>> + Send + 'static,
        T: Send + 'static,
    {
        let permit = self.acquire().await?;

        let mut handle = tokio::spawn(async move {
            let _permit = permit;
            task.await
        });

        match tokio::time::timeout(self.limits.timeout, &mut handle).await {
            Ok(joined) => joined?,
            Err(_) => {
                handle.abort();
                Err(AppError::Timeout(self.limits.timeout))
            }
        }
    }

    async fn acquire(&self) -> Result<OwnedSemaphorePermit, AppError> {
        if let Ok(permit) = self.slots.clone().try_acquire_owned() {
            return Ok(permit);
        }

        let _waiting = PendingGuard::enter(&self.pending, self.limits.max_pending)?;

        tracing::debug!(
            "All {} dispatch slots busy, waiting for one to free up",
            self.limits.max_in_flight
        );

        self.slots
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| AppError::InternalError("task dispatcher is closed".to_string()))
    }
}

/// Counts a caller waiting for a slot for as long as it is alive.
struct PendingGuard<'a> {
    pending: &'a AtomicUsize,
}

impl<'a> PendingGuard<'a> {
    fn enter(pending: &'a AtomicUsize, max_pending: usize) -> Result<Self, AppError> {
        let waiting = pending.fetch_add(1, Ordering::SeqCst);
        let guard = Self { pending };

        if waiting >= max_pending {
            return Err(AppError::Overloaded);
        }

        Ok(guard)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending.fetch_sub(1, Ordering::SeqCst);
    }
}
