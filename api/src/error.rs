use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Device `{0}` not found")]
    DeviceNotFound(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::DeviceNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidWeights(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("Request failed ({}): {}", status, self);

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
