//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Rows are inserted directly through the entity layer so
//! repository tests can seed state without going through the code under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let sport = factory::sport::create_sport(&db).await?;
//!
//!     // Customize the document
//!     let soccer = factory::sport::SportFactory::new(&db)
//!         .sport_name("soccer")
//!         .schedule(factory::sport::schedule_document((10, 0), (12, 0), "MONDAY"))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod sport;

pub use sport::create_sport;
