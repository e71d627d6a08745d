//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homecontrol_domain::error::HomeControlError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

const DASHBOARD_NOT_FOUND: &str = "dashboard_not_found";

/// Maps handler failures to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// No dashboard has been selected for this instance.
    NoDashboardSelected,
    /// An error from the application layer.
    Domain(HomeControlError),
}

impl From<HomeControlError> for ApiError {
    fn from(err: HomeControlError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NoDashboardSelected | Self::Domain(HomeControlError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, DASHBOARD_NOT_FOUND.to_string())
            }
            Self::Domain(HomeControlError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(HomeControlError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
