//! Domain conversions and lookup results for sport operations
//!
//! Converts stored sport documents into the [`Sport`] model and back, and defines
//! [`ScheduleLookup`], the result of reading a sport's schedules.

use sea_orm::ActiveValue;

use crate::{
    model::sport::{Schedule, Sport},
    server::error::AppError,
};

/// Result of looking up the schedules of a sport.
///
/// A sport that does not exist and a sport without schedules are different
/// outcomes and must stay distinguishable up to the HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleLookup {
    /// No sport is registered under the requested name.
    NotFound,
    /// The sport exists; the list may be empty.
    Found(Vec<Schedule>),
}

impl ScheduleLookup {
    pub fn from_sport(sport: Option<Sport>) -> Self {
        match sport {
            Some(sport) => Self::Found(sport.schedules),
            None => Self::NotFound,
        }
    }
}

impl Sport {
    /// Converts a stored sport document into the domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Sport)` - The converted sport
    /// - `Err(AppError::JsonErr(_))` - The embedded schedules are not valid schedule documents
    pub fn from_entity(entity: entity::sport::Model) -> Result<Self, AppError> {
        Ok(Self {
            sport_name: entity.sport_name,
            schedules: decode_schedules(entity.schedules)?,
        })
    }

    /// Converts the sport into an active model ready for insertion.
    pub fn into_active_model(self) -> Result<entity::sport::ActiveModel, AppError> {
        Ok(entity::sport::ActiveModel {
            sport_name: ActiveValue::Set(self.sport_name),
            schedules: ActiveValue::Set(encode_schedules(&self.schedules)?),
        })
    }
}

/// Decodes the embedded schedule array of a sport document.
pub fn decode_schedules(value: serde_json::Value) -> Result<Vec<Schedule>, AppError> {
    Ok(serde_json::from_value(value)?)
}

/// Encodes schedules as the embedded array of a sport document.
pub fn encode_schedules(schedules: &[Schedule]) -> Result<serde_json::Value, AppError> {
    Ok(serde_json::to_value(schedules)?)
}
