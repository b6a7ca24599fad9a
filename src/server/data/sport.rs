//! Sport data repository for database operations
//!
//! Defines the `SportsRepository` contract and `SportRepository`, its SeaORM
//! adapter. Each sport is stored as a single document row keyed by its name with
//! its schedules embedded as a JSON array, so every mutation touches exactly one
//! row and relies on the database's row-level atomicity.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, QueryFilter, SqlErr, TransactionTrait,
};

use crate::{
    model::sport::{Schedule, Sport},
    server::{
        error::AppError,
        model::sport::{decode_schedules, encode_schedules, ScheduleLookup},
    },
};

/// Storage contract for sports and their schedules.
///
/// Every operation is a single logical step against the store; callers handle
/// concurrency by dispatching operations as independent tasks.
#[async_trait]
pub trait SportsRepository: Send + Sync {
    /// Returns every stored sport, or an empty list when there are none.
    async fn get_all(&self) -> Result<Vec<Sport>, AppError>;

    /// Finds a single sport by name.
    ///
    /// # Returns
    /// - `Ok(Some(Sport))` - The sport is registered
    /// - `Ok(None)` - No sport has this name
    async fn get_sport(&self, sport_name: &str) -> Result<Option<Sport>, AppError>;

    /// Reads the schedules of a sport.
    ///
    /// # Returns
    /// - `Ok(ScheduleLookup::Found(_))` - The sport exists, possibly without schedules
    /// - `Ok(ScheduleLookup::NotFound)` - No sport has this name
    async fn get_schedules(&self, sport_name: &str) -> Result<ScheduleLookup, AppError>;

    /// Registers a new sport.
    ///
    /// # Returns
    /// - `Ok(())` - The sport was stored
    /// - `Err(AppError::DuplicateKey(_))` - A sport with the same name already exists
    async fn add_sport(&self, sport: Sport) -> Result<(), AppError>;

    /// Adds a schedule to a sport.
    ///
    /// # Returns
    /// - `Ok(())` - The schedule was appended
    /// - `Err(AppError::InvalidOperation(_))` - The sport is missing or already has the schedule
    async fn add_schedule(&self, sport_name: &str, schedule: Schedule) -> Result<(), AppError>;

    /// Deletes a sport with all of its schedules.
    ///
    /// # Returns
    /// - `Ok(())` - The sport was deleted
    /// - `Err(AppError::InvalidOperation(_))` - No sport has this name
    async fn remove_sport(&self, sport_name: &str) -> Result<(), AppError>;

    /// Removes every occurrence of a schedule from a sport.
    ///
    /// # Returns
    /// - `Ok(())` - The schedule was removed
    /// - `Err(AppError::InvalidOperation(_))` - The sport is missing or lacks the schedule
    async fn remove_schedule(&self, sport_name: &str, schedule: Schedule)
        -> Result<(), AppError>;
}

/// SeaORM-backed implementation of [`SportsRepository`].
///
/// Owns a clone of the connection pool so it can be shared with spawned tasks.
#[derive(Clone)]
pub struct SportRepository {
    db: DatabaseConnection,
}

impl SportRepository {
    /// Creates a new SportRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection pool, cloned cheaply
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a transaction holding the write lock on the named sport.
    ///
    /// The no-op update claims the row before it is read, so concurrent schedule
    /// mutations of the same sport apply one after another instead of both deciding
    /// on the same stale read.
    ///
    /// # Returns
    /// - `Ok(Some((txn, schedules)))` - The sport exists; its current schedules
    /// - `Ok(None)` - No sport has this name
    async fn lock_schedules(
        &self,
        sport_name: &str,
    ) -> Result<Option<(DatabaseTransaction, Vec<Schedule>)>, AppError> {
        let txn = self.db.begin().await?;

        let claimed = entity::prelude::Sport::update_many()
            .col_expr(
                entity::sport::Column::Schedules,
                Expr::col(entity::sport::Column::Schedules).into(),
            )
            .filter(entity::sport::Column::SportName.eq(sport_name))
            .exec(&txn)
            .await?;

        if claimed.rows_affected == 0 {
            return Ok(None);
        }

        let Some(model) = entity::prelude::Sport::find_by_id(sport_name.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let schedules = decode_schedules(model.schedules)?;

        Ok(Some((txn, schedules)))
    }

    /// Writes the schedules of a claimed sport and commits the transaction.
    async fn store_schedules(
        txn: DatabaseTransaction,
        sport_name: &str,
        schedules: &[Schedule],
    ) -> Result<(), AppError> {
        entity::sport::ActiveModel {
            sport_name: ActiveValue::Unchanged(sport_name.to_string()),
            schedules: ActiveValue::Set(encode_schedules(schedules)?),
        }
        .update(&txn)
        .await?;

        txn.commit().await?;

        Ok(())
    }
}

#[async_trait]
impl SportsRepository for SportRepository {
    async fn get_all(&self) -> Result<Vec<Sport>, AppError> {
        entity::prelude::Sport::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Sport::from_entity)
            .collect()
    }

    async fn get_sport(&self, sport_name: &str) -> Result<Option<Sport>, AppError> {
        entity::prelude::Sport::find_by_id(sport_name.to_string())
            .one(&self.db)
            .await?
            .map(Sport::from_entity)
            .transpose()
    }

    async fn get_schedules(&self, sport_name: &str) -> Result<ScheduleLookup, AppError> {
        Ok(ScheduleLookup::from_sport(self.get_sport(sport_name).await?))
    }

    async fn add_sport(&self, sport: Sport) -> Result<(), AppError> {
        let sport_name = sport.sport_name.clone();
        let model = sport.into_active_model()?;

        match entity::prelude::Sport::insert(model).exec(&self.db).await {
            Ok(_) => Ok(()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::DuplicateKey(sport_name))
                }
                _ => Err(err.into()),
            },
        }
    }

    async fn add_schedule(&self, sport_name: &str, schedule: Schedule) -> Result<(), AppError> {
        let Some((txn, mut schedules)) = self.lock_schedules(sport_name).await? else {
            return Err(sport_not_registered(sport_name));
        };

        if schedules.contains(&schedule) {
            return Err(AppError::InvalidOperation(format!(
                "schedule is already registered for sport '{}'",
                sport_name
            )));
        }

        schedules.push(schedule);

        Self::store_schedules(txn, sport_name, &schedules).await
    }

    async fn remove_sport(&self, sport_name: &str) -> Result<(), AppError> {
        let result = entity::prelude::Sport::delete_by_id(sport_name.to_string())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(sport_not_registered(sport_name));
        }

        Ok(())
    }

    async fn remove_schedule(
        &self,
        sport_name: &str,
        schedule: Schedule,
    ) -> Result<(), AppError> {
        let Some((txn, mut schedules)) = self.lock_schedules(sport_name).await? else {
            return Err(sport_not_registered(sport_name));
        };

        if !schedules.contains(&schedule) {
            return Err(AppError::InvalidOperation(format!(
                "schedule is not registered for sport '{}'",
                sport_name
            )));
        }

        schedules.retain(|registered| *registered != schedule);

        Self::store_schedules(txn, sport_name, &schedules).await
    }
}

fn sport_not_registered(sport_name: &str) -> AppError {
    AppError::InvalidOperation(format!("sport '{}' is not registered", sport_name))
}
