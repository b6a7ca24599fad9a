//! Sport factory for creating test sport documents.
//!
//! Schedules are written as raw JSON documents in the same shape the API uses
//! (`fromHour`, `toHour`, `day`), so tests exercise the repository's decoding path.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Builds a schedule document.
///
/// # Arguments
/// - `from` - `(hour, min)` the schedule starts at
/// - `to` - `(hour, min)` the schedule ends at
/// - `day` - Upper-case day name such as `"MONDAY"`
pub fn schedule_document(from: (i32, i32), to: (i32, i32), day: &str) -> Value {
    json!({
        "fromHour": { "hour": from.0, "min": from.1 },
        "toHour": { "hour": to.0, "min": to.1 },
        "day": day,
    })
}

/// Factory for creating test sports with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::sport::SportFactory;
///
/// let sport = SportFactory::new(&db)
///     .sport_name("tennis")
///     .build()
///     .await?;
/// ```
pub struct SportFactory<'a> {
    db: &'a DatabaseConnection,
    sport_name: String,
    schedules: Vec<Value>,
}

impl<'a> SportFactory<'a> {
    /// Creates a new SportFactory with default values.
    ///
    /// Defaults:
    /// - sport_name: `"Sport {id}"` where id is auto-incremented
    /// - schedules: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            sport_name: format!("Sport {}", id),
            schedules: Vec::new(),
        }
    }

    /// Sets the sport name.
    pub fn sport_name(mut self, sport_name: impl Into<String>) -> Self {
        self.sport_name = sport_name.into();
        self
    }

    /// Appends a schedule document, see [`schedule_document`].
    pub fn schedule(mut self, schedule: Value) -> Self {
        self.schedules.push(schedule);
        self
    }

    /// Builds and inserts the sport entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created sport entity
    /// - `Err(DbErr)` - Database error during insert (duplicate name, missing table)
    pub async fn build(self) -> Result<entity::sport::Model, DbErr> {
        entity::sport::ActiveModel {
            sport_name: ActiveValue::Set(self.sport_name),
            schedules: ActiveValue::Set(Value::Array(self.schedules)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sport with default values and no schedules.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created sport entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_sport(db: &DatabaseConnection) -> Result<entity::sport::Model, DbErr> {
    SportFactory::new(db).build().await
}
