// Main entry point for the KYC API server

use anyhow::{Context, Result};
use kyc_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kyc_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Simple Digital KYC backend");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(upload_dir = %config.upload_dir.display(), "Configuration loaded");

    // Ensure the upload root exists before accepting requests
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .context("Failed to create upload directory")?;

    // Build application
    let app = build_app(&config);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
