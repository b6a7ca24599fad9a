//! Request parsing helpers shared by controllers.

pub mod extract;
pub mod param;
