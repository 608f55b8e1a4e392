//! SeaORM entity definitions for the soldiers store.

pub mod prelude;

pub mod soldier;
