//! # homecontrold: homecontrol daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Open the Home Assistant `.storage` directory (store + registry adapter)
//! - Construct the dashboard service, injecting the adapter via port traits
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (Ctrl-C / SIGTERM)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use homecontrol_adapter_http_axum::router;
use homecontrol_adapter_http_axum::state::AppState;
use homecontrol_app::services::dashboard_service::DashboardService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load homecontrol.toml")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Storage
    let storage = homecontrol_adapter_storage_hass::Config {
        path: config.storage.path.clone(),
    }
    .build()
    .await
    .context("failed to open Home Assistant storage")?;
    tracing::info!(path = %storage.root().display(), "using Home Assistant storage");

    // Services
    let dashboard_service = DashboardService::new(storage.clone(), storage);

    let selected = config.dashboard.selected_id();
    match &selected {
        Some(id) => tracing::info!(dashboard = %id, "serving selected dashboard"),
        None => tracing::warn!("no dashboard selected, /api/homecontrol/dashboard will answer 404"),
    }

    // HTTP
    let app = router::build(AppState::new(dashboard_service, selected));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("homecontrold listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homecontrold stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
