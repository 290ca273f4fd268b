use actix_web::{put, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::contact::application::ports::incoming::use_cases::MarkMessageRepliedError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Flag a contact message as replied
#[utoipa::path(
    put,
    path = "/api/contact-messages/{message_id}/replied",
    tag = "contact",
    params(("message_id" = String, Path, description = "Message identifier")),
    responses(
        (
            status = 200,
            description = "Message flagged",
            body = MessageResponse,
            example = json!({ "message": "Message marked as replied" })
        ),
        (status = 404, description = "Unknown message", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/contact-messages/{message_id}/replied")]
pub async fn mark_message_replied_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.contact.mark_replied.execute(message_id.clone()).await {
        Ok(()) => ApiResponse::message("Message marked as replied"),

        Err(MarkMessageRepliedError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }

        Err(MarkMessageRepliedError::RepositoryError(e)) => {
            error!("Repository error marking message {} replied: {}", message_id, e);
            ApiResponse::internal_error()
        }
    }
}
