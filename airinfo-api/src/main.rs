use std::net::SocketAddr;
use std::sync::Arc;

use airinfo_api::{app, AppState};
use airinfo_core::{AirportInfoService, ServiceTimeouts};
use airinfo_store::{app_config::Config, seed, DbClient, HttpMetarClient, PostgresAirportRepository};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airinfo_api=debug,airinfo_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting AirInfo API on port {}", config.server.port);

    let db = DbClient::new(&config.database)
        .await
        .context("Failed to connect to the airport store")?;
    db.migrate().await.context("Failed to run migrations")?;

    let airports = Arc::new(PostgresAirportRepository::new(db.pool.clone()));
    if config.seed.enabled {
        seed::seed_airports(airports.as_ref())
            .await
            .context("Failed to seed airports")?;
    }

    let weather = HttpMetarClient::new(&config.weather.base_url, config.weather.timeout())
        .context("Failed to build METAR client")?;
    tracing::info!("METAR lookups go to {}", weather.base_url());

    let service = AirportInfoService::new(
        airports,
        Arc::new(weather),
        ServiceTimeouts {
            store: config.database.timeout(),
            weather: config.weather.timeout(),
        },
    );

    let app = app(AppState::new(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
