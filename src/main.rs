mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let data_loader = startup::connect_to_store(&config).await;

    let app = router::router()
        .with_state(AppState::new(data_loader.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    data_loader.disconnect().await;

    tracing::info!("Server shutdown complete");

    Ok(())
}
