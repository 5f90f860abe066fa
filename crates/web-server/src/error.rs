use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Selection(#[from] selection::SelectionError),
    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),
    #[error("Chart error: {0}")]
    Chart(#[from] charting::ChartError),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<core_types::CoreError> for AppError {
    fn from(err: core_types::CoreError) -> Self {
        AppError::Selection(err.into())
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Selection(err) if err.is_invalid_request() => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Selection(err) => {
                tracing::error!(error = ?err, "Selection routing error.");
                (StatusCode::INTERNAL_SERVER_ERROR, "The selected view could not be built".to_string())
            }
            AppError::Analytics(err) => {
                tracing::error!(error = ?err, "Analytics error.");
                (StatusCode::INTERNAL_SERVER_ERROR, "An error occurred while deriving metrics".to_string())
            }
            AppError::Chart(err) => {
                tracing::error!(error = ?err, "Chart rendering error.");
                (StatusCode::INTERNAL_SERVER_ERROR, "The chart could not be rendered".to_string())
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
