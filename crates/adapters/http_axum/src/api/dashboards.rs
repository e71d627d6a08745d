//! JSON handlers for normalized dashboards.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use homecontrol_app::ports::{DashboardStore, EntityRegistry};
use homecontrol_domain::dashboard::{DashboardDocument, NormalizedDashboards};
use homecontrol_domain::id::DashboardId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<NormalizedDashboards>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the single-dashboard endpoints.
pub enum GetResponse {
    Ok(Json<DashboardDocument>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/homecontrol/dashboard`
#[tracing::instrument(skip(state))]
pub async fn selected<S, R>(State(state): State<AppState<S, R>>) -> Result<GetResponse, ApiError>
where
    S: DashboardStore + Send + Sync + 'static,
    R: EntityRegistry + Send + Sync + 'static,
{
    let id = state.selected.as_ref().ok_or(ApiError::NoDashboardSelected)?;
    let document = state.dashboard_service.document(id).await?;
    Ok(GetResponse::Ok(Json(document)))
}

/// `GET /api/homecontrol/dashboards`
#[tracing::instrument(skip(state))]
pub async fn list<S, R>(State(state): State<AppState<S, R>>) -> Result<ListResponse, ApiError>
where
    S: DashboardStore + Send + Sync + 'static,
    R: EntityRegistry + Send + Sync + 'static,
{
    let dashboards = state.dashboard_service.normalize_all().await?;
    Ok(ListResponse::Ok(Json(dashboards)))
}

/// `GET /api/homecontrol/dashboards/:id`
#[tracing::instrument(skip(state))]
pub async fn get<S, R>(
    State(state): State<AppState<S, R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: DashboardStore + Send + Sync + 'static,
    R: EntityRegistry + Send + Sync + 'static,
{
    let id = id
        .parse::<DashboardId>()
        .map_err(|err| ApiError::Domain(err.into()))?;
    let document = state.dashboard_service.document(&id).await?;
    Ok(GetResponse::Ok(Json(document)))
}
