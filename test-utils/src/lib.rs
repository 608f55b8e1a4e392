//! Soldiers Service Test Utils
//!
//! Provides shared testing utilities for the soldiers service: fixtures for in-memory test
//! data and factories that insert records into a test database.
//!
//! # Overview
//!
//! - **fixture**: Entity models and JSON request bodies built without touching a database
//! - **factory**: Builders that insert soldier rows through a `DatabaseConnection`
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{factory, fixture};
//!
//! #[tokio::test]
//! async fn test_soldier_lookup() -> Result<(), sea_orm::DbErr> {
//!     let db = /* connection to a store with the soldiers table */;
//!
//!     let soldier = factory::soldier::SoldierFactory::new(&db)
//!         .business_id(7)
//!         .rank("Sgt")
//!         .build()
//!         .await?;
//!
//!     let body = fixture::soldier::create_body(8);
//!     // Send `body` to the API...
//!
//!     Ok(())
//! }
//! ```

pub mod factory;
pub mod fixture;
