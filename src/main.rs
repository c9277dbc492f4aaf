//! Main entry point for the Tiered Image Dispatch Gateway

use image_dispatch_gateway::{
    api, config::Settings, executor::pool::ExecutorPool, AppState,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    if settings.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    info!("Starting Tiered Image Dispatch Gateway");
    info!(
        small = %settings.executors.small.name,
        large = %settings.executors.large.name,
        "Configured executors"
    );

    // Build the two executor clients
    let executors = Arc::new(ExecutorPool::from_config(&settings.executors)?);

    // Create application state
    let app_state = Arc::new(AppState { executors });

    // Build the router
    let app = api::routes::create_router(app_state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    info!("Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
