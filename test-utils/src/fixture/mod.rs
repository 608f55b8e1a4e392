//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit tests
//! of model conversions, as factory defaults, and as HTTP request bodies.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // In-memory entity model (no DB)
//! let soldier = fixture::soldier::entity();
//!
//! // JSON body for `POST /soldiersdb/`
//! let body = fixture::soldier::create_body(1);
//! ```

pub mod soldier;

pub use soldier::{create_body as soldier_create_body, entity as soldier_entity};
