use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::AddProjectError;
use crate::modules::portfolio::domain::entities::{Project, ProjectCreate};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Append a project to the active portfolio
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectCreate,
    responses(
        (status = 200, description = "Created project", body = Project),
        (status = 404, description = "No active portfolio", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<ProjectCreate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.add.execute(req.into_inner()).await {
        Ok(project) => ApiResponse::success(project),

        Err(AddProjectError::PortfolioNotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(AddProjectError::RepositoryError(e)) => {
            error!("Repository error adding project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
