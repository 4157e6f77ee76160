//!
//! bookingmx reservation service.
//! Reads configuration from TOML file (~/.config/bookingmx/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use bookingmx_reservations::application::trips::dataset;
use bookingmx_reservations::application::ReservationService;
use bookingmx_reservations::infrastructure::InMemoryReservationStore;
use bookingmx_reservations::support::ShutdownSignal;
use bookingmx_reservations::{create_api_router, default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("BOOKINGMX_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting bookingmx reservation service...");

    // ── Wire storage and services ──────────────────────────────
    let store = Arc::new(InMemoryReservationStore::new());
    let reservation_service = Arc::new(ReservationService::new(store));
    let trip_dataset = Arc::new(dataset::sample());

    let router = create_api_router(reservation_service, trip_dataset);

    // Initialize shutdown signal (SIGINT / Ctrl+C)
    let shutdown = ShutdownSignal::new();
    shutdown.start_signal_listener();

    // ── Serve ──────────────────────────────────────────────────
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    let api_shutdown = shutdown.clone();
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        })
        .await?;

    info!("👋 bookingmx reservation service shutdown complete");
    Ok(())
}
