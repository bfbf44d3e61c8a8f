use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};

/// Standardized error body, matching the shape `AppError` responds with
pub fn error_response(status_code: StatusCode, kind: &str, message: String) -> HttpResponse {
    HttpResponse::build(status_code).json(serde_json::json!({
        "error": {
            "code": status_code.as_u16(),
            "message": message,
            "kind": kind,
        }
    }))
}

/// Handler for malformed or oversized JSON bodies, installed via `JsonConfig`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    let status = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        JsonPayloadError::ContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    let response = error_response(status, "invalid_json", err.to_string());

    actix_web::error::InternalError::from_response(err, response).into()
}
