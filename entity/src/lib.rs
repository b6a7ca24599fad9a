//! SeaORM entity definitions for the sports store.

pub mod prelude;

pub mod sport;
