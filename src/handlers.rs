use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde_json::Value;

use crate::error::AppError;
use crate::types::{MessageRequest, MessageResponse};

/// Decodes a `POST /DevOps` body.
///
/// Key presence is checked on the raw JSON value first so that a missing `to`
/// and a `to` of the wrong type surface as different errors.
fn decode_request(body: &[u8]) -> Result<MessageRequest, AppError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| AppError::MalformedInput(e.to_string()))?;

    let fields = value
        .as_object()
        .ok_or_else(|| AppError::MalformedInput("expected a JSON object".to_string()))?;
    if !fields.contains_key("to") {
        return Err(AppError::MissingField("to"));
    }

    serde_json::from_value(value).map_err(|e| AppError::MalformedInput(e.to_string()))
}

pub async fn post_message(body: Bytes) -> Result<impl IntoResponse, AppError> {
    let req = decode_request(&body)?;
    info!("Greeting {}", req.to);

    Ok((StatusCode::OK, Json(MessageResponse::greeting(&req.to))))
}

pub async fn health() -> &'static str {
    "Health Check!!"
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
