// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;
use actix_web::HttpResponse;

/// Every JSON body goes through this config, so malformed payloads (missing
/// fields, wrong types, invalid email addresses) are rejected with 422 before
/// any handler runs.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let response = json_error_response(&err);
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

fn json_error_response(err: &JsonPayloadError) -> HttpResponse {
    let message = err.to_string();
    match err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            ApiResponse::error(StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", &message)
        }
        JsonPayloadError::ContentType => ApiResponse::error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_MEDIA_TYPE",
            &message,
        ),
        _ => ApiResponse::unprocessable_entity("VALIDATION_ERROR", &message),
    }
}
