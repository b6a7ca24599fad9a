//! Database repository layer.
//!
//! This module contains the repository abstractions and their database-backed
//! implementations. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from the service layer.

pub mod sport;

#[cfg(test)]
mod test;
