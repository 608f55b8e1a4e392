//! API data transfer objects.
//!
//! Request and response shapes exchanged over HTTP. Field names follow the service's JSON
//! contract (`ID` for the business identifier, `_id` for the store identity).

pub mod api;
pub mod soldier;
