use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetProjectError;
use crate::modules::portfolio::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one project of the active portfolio
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 404, description = "Unknown project or no active portfolio", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get.execute(project_id.clone()).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectError::PortfolioNotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(GetProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectError::RepositoryError(e)) => {
            error!("Repository error fetching project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
