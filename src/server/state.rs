//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use std::sync::Arc;

use crate::server::data::soldier::DataLoader;

/// Application state containing shared resources.
///
/// Cloning is cheap: the data loader sits behind an `Arc`, so every clone shares the same
/// connection state.
#[derive(Clone)]
pub struct AppState {
    /// Data-access layer for soldier records.
    ///
    /// May be disconnected if the store was unreachable at startup, in which case data
    /// endpoints answer 503 Service Unavailable.
    pub data_loader: Arc<DataLoader>,
}

impl AppState {
    pub fn new(data_loader: Arc<DataLoader>) -> Self {
        Self { data_loader }
    }
}
