//! CleanSky HTTP Server
//!
//! Main entry point for the air-quality and weather API.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use anyhow::Context;
use infrastructure::{
    AppConfig, OpenMeteoAirQualityAdapter, OpenMeteoWeatherAdapter, init_logging, shared_fetcher,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(&config.logging)?;

    info!("CleanSky v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        static_dir = %config.server.static_dir,
        air_quality_url = %config.air_quality.base_url,
        weather_url = %config.weather.base_url,
        "Configuration loaded"
    );

    // One connection pool for every upstream
    let fetcher = shared_fetcher().context("Failed to build HTTP client")?;
    let air_quality = OpenMeteoAirQualityAdapter::with_fetcher(&fetcher, config.air_quality.clone());
    let weather = OpenMeteoWeatherAdapter::with_fetcher(&fetcher, config.weather.clone());
    let forecast_days = weather.default_forecast_days();

    let state = AppState::from_ports(
        Arc::new(air_quality),
        Arc::new(weather),
        forecast_days,
        config.server.clone(),
    );

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let shutdown = Arc::clone(&shutdown);
            async move {
                shutdown_signal().await;
                shutdown.notify_one();
            }
        })
        .into_future();

    let timeout = config.server.shutdown_timeout();
    tokio::select! {
        result = server => result?,
        () = drain_deadline(&shutdown, timeout) => {
            warn!("Connections still open after {:?}, exiting", timeout);
        }
    }

    info!("Server shutdown complete");

    Ok(())
}

/// Resolves `timeout` after shutdown has begun
async fn drain_deadline(shutdown: &Notify, timeout: Duration) {
    shutdown.notified().await;
    info!("Waiting up to {:?} for connections to close...", timeout);
    tokio::time::sleep(timeout).await;
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
