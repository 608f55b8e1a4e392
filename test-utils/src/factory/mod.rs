//! Factory methods for creating test data.
//!
//! Factories insert entities into the database with sensible defaults, reducing
//! boilerplate in tests. Each factory has a builder struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let soldier = factory::create_soldier(&db).await?;
//!
//! // Customize individual fields
//! let sergeant = factory::soldier::SoldierFactory::new(&db)
//!     .business_id(42)
//!     .rank("Sgt")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod soldier;

pub use soldier::{create_soldier, create_soldier_with_id};
