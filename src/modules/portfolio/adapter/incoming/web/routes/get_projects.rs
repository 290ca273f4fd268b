use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::ListProjectsError;
use crate::modules::portfolio::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the projects of the active portfolio, in insertion order
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Projects", body = [Project]),
        (status = 404, description = "No active portfolio", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list.execute().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(ListProjectsError::PortfolioNotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(ListProjectsError::RepositoryError(e)) => {
            error!("Repository error listing projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
