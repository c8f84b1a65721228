use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use thiserror::Error;
use tracing::warn;

/// Errors a handler can answer with
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown filter level '{0}', expected region, sub_region or block")]
    UnknownLevel(String),

    #[error("unknown measure '{0}', expected vehicle_count or tax_principal")]
    UnknownMeasure(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownLevel(_) | ApiError::UnknownMeasure(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::UnknownLevel(_) => "unknown_level",
            ApiError::UnknownMeasure(_) => "unknown_measure",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Rejecting request: {}", self);
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
