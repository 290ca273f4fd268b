use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitMessageError;
use crate::modules::contact::domain::entities::{ContactMessage, ContactMessageCreate};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Submit a contact-form message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactMessageCreate,
    responses(
        (status = 200, description = "Stored message", body = ContactMessage),
        (
            status = 422,
            description = "Missing field or invalid email address",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Json deserialize error: email: `invalid-email` is not a valid email address"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_message_handler(
    req: web::Json<ContactMessageCreate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit.execute(req.into_inner()).await {
        Ok(message) => ApiResponse::success(message),

        Err(SubmitMessageError::RepositoryError(e)) => {
            error!("Repository error storing contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
