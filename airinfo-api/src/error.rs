use airinfo_core::CoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    StoreUnavailable(String),
    WeatherServiceError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::StoreUnavailable(msg) => {
                tracing::error!("Airport store unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Airport store unavailable")
            }
            AppError::WeatherServiceError(msg) => {
                tracing::error!("Weather service error: {}", msg);
                (StatusCode::BAD_GATEWAY, "Weather service error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::StoreUnavailable(msg) => AppError::StoreUnavailable(msg),
            CoreError::WeatherServiceError(msg) => AppError::WeatherServiceError(msg),
        }
    }
}
