//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod dashboards;

use axum::Router;
use axum::routing::get;

use homecontrol_app::ports::{DashboardStore, EntityRegistry};

use crate::state::AppState;

/// Build the `/api/homecontrol` sub-router.
pub fn routes<S, R>() -> Router<AppState<S, R>>
where
    S: DashboardStore + Send + Sync + 'static,
    R: EntityRegistry + Send + Sync + 'static,
{
    Router::new()
        .route("/dashboard", get(dashboards::selected::<S, R>))
        .route("/dashboards", get(dashboards::list::<S, R>))
        .route("/dashboards/{id}", get(dashboards::get::<S, R>))
}
