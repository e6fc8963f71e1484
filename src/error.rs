use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const UPSTREAM_PARSE_MESSAGE: &str = "Failed to process response";
pub const UPSTREAM_TRANSPORT_MESSAGE: &str = "Failed to reach upstream service";
const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream request failed: {0}")]
    UpstreamTransport(#[from] reqwest::Error),

    #[error("Upstream response could not be parsed: {0}")]
    UpstreamParse(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamTransport(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamParse(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text shown to the caller. Upstream and internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidRequest(msg) => msg.clone(),
            AppError::UpstreamTransport(_) => UPSTREAM_TRANSPORT_MESSAGE.to_string(),
            AppError::UpstreamParse(_) => UPSTREAM_PARSE_MESSAGE.to_string(),
            AppError::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::error!("Request failed: {} - {}", status.as_u16(), self);

        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
