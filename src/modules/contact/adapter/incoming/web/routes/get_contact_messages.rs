use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::contact::application::ports::incoming::use_cases::ListMessagesError;
use crate::modules::contact::domain::entities::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the most recent contact messages, newest first (at most 100)
#[utoipa::path(
    get,
    path = "/api/contact-messages",
    tag = "contact",
    responses(
        (status = 200, description = "Messages", body = [ContactMessage]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/contact-messages")]
pub async fn get_contact_messages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(messages) => ApiResponse::success(messages),

        Err(ListMessagesError::RepositoryError(e)) => {
            error!("Repository error listing contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}
