//! Shared application state for axum handlers.

use std::sync::Arc;

use homecontrol_app::ports::{DashboardStore, EntityRegistry};
use homecontrol_app::services::dashboard_service::DashboardService;
use homecontrol_domain::id::DashboardId;

/// Application state shared across all axum handlers.
///
/// Generic over the dashboard store and entity registry to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<S, R> {
    /// Dashboard normalization service.
    pub dashboard_service: Arc<DashboardService<S, R>>,
    /// Dashboard served by `GET /api/homecontrol/dashboard`, if any.
    pub selected: Option<DashboardId>,
}

impl<S, R> Clone for AppState<S, R> {
    fn clone(&self) -> Self {
        Self {
            dashboard_service: Arc::clone(&self.dashboard_service),
            selected: self.selected.clone(),
        }
    }
}

impl<S, R> AppState<S, R>
where
    S: DashboardStore + Send + Sync + 'static,
    R: EntityRegistry + Send + Sync + 'static,
{
    /// Create a new application state from the service and the selection.
    pub fn new(dashboard_service: DashboardService<S, R>, selected: Option<DashboardId>) -> Self {
        Self {
            dashboard_service: Arc::new(dashboard_service),
            selected,
        }
    }
}
