use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value used for both fields of an unset [`Time`].
const UNSET_TIME: i32 = -1;

/// A time of day as hour and minutes.
///
/// Neither field is range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Time {
    pub hour: i32,
    #[serde(rename = "min")]
    pub minute: i32,
}

impl Time {
    pub fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            hour: UNSET_TIME,
            minute: UNSET_TIME,
        }
    }
}

/// Day of the week a schedule takes place on.
///
/// `None` marks an unset day and is never a meaningful schedule day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    #[default]
    None,
}

/// A weekly time slot.
///
/// Compared structurally on all three fields; a sport holds each distinct
/// value at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Schedule {
    pub from_hour: Time,
    pub to_hour: Time,
    pub day: Day,
}

impl Schedule {
    pub fn new(from_hour: Time, to_hour: Time, day: Day) -> Self {
        Self {
            from_hour,
            to_hour,
            day,
        }
    }
}

/// A sport and its weekly schedules.
///
/// `sport_name` is the identity of the entity. `PartialEq` and `Hash` compare
/// every field; use [`Sport::is_same_sport`] to compare identities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Sport {
    pub sport_name: String,
    pub schedules: Vec<Schedule>,
}

impl Sport {
    pub fn new(sport_name: impl Into<String>, schedules: Vec<Schedule>) -> Self {
        Self {
            sport_name: sport_name.into(),
            schedules,
        }
    }

    /// Returns true when both values name the same sport, whatever their schedules.
    pub fn is_same_sport(&self, other: &Sport) -> bool {
        self.sport_name == other.sport_name
    }
}
