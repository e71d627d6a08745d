//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homecontrol_app::ports::{DashboardStore, EntityRegistry};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the dashboard API under `/api/homecontrol`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, R>(state: AppState<S, R>) -> Router
where
    S: DashboardStore + Send + Sync + 'static,
    R: EntityRegistry + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/homecontrol", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
