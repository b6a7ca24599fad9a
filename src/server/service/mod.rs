//! Service layer between the controllers and the data layer.
//!
//! - `sport` - Sports operations and their dispatch onto separate tasks
//! - `dispatch` - Bounded executor backing that dispatch
//! - `auth` - Credential store used to authenticate requests

pub mod auth;
pub mod dispatch;
pub mod sport;
