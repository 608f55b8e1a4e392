//! Database repository layer.
//!
//! The data layer owns the store connection and performs every database operation. It
//! returns domain models, converting entity models at its boundary, and classifies store
//! failures into `DataError` so callers never see driver-specific errors.

pub mod soldier;
