use actix_web::{put, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::portfolio::domain::entities::{Project, ProjectCreate};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace one project
///
/// This is a full replacement: optional fields left out of the body are
/// reset (`technologies` to `[]`, `featured` to `false`, links to `null`).
#[utoipa::path(
    put,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project identifier")),
    request_body = ProjectCreate,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 404, description = "Unknown project or no active portfolio", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/projects/{project_id}")]
pub async fn update_project_handler(
    path: web::Path<String>,
    req: web::Json<ProjectCreate>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .update
        .execute(project_id.clone(), req.into_inner())
        .await
    {
        Ok(project) => ApiResponse::success(project),

        Err(UpdateProjectError::PortfolioNotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(UpdateProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
