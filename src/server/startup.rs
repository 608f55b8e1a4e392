use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, data::soldier::DataLoader};

/// Installs the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Creates the data loader and connects it to the store.
///
/// A failed connection does not abort startup. The failure is logged by the loader and the
/// service keeps running with every data endpoint answering 503 until restarted.
///
/// # Arguments
/// - `config` - Application configuration containing the store settings
///
/// # Returns
/// - `Arc<DataLoader>` - Shared loader, connected if the store was reachable
pub async fn connect_to_store(config: &Config) -> Arc<DataLoader> {
    let data_loader = Arc::new(DataLoader::new(config.store()));

    data_loader.connect().await;

    if !data_loader.is_connected().await {
        tracing::warn!("Starting without a store connection; data endpoints will return 503");
    }

    data_loader
}

/// Resolves once the process receives Ctrl+C or, on Unix, SIGTERM.
///
/// If a signal handler cannot be installed the failure is logged and that signal is
/// ignored rather than triggering an immediate shutdown.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
