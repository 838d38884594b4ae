use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Plain text body, kept byte-for-byte for existing clients.
            Self::MethodNotAllowed => (status, "ERROR").into_response(),
            err => {
                log::warn!("Rejecting request: {}", err);
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
        }
    }
}
