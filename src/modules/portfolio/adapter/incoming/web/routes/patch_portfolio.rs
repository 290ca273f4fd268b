use actix_web::{put, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::PatchPortfolioError;
use crate::modules::portfolio::domain::entities::{Portfolio, PortfolioUpdate};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update selected sections of the active portfolio
///
/// Absent or `null` sections are left untouched.
#[utoipa::path(
    put,
    path = "/api/portfolio",
    tag = "portfolio",
    request_body = PortfolioUpdate,
    responses(
        (status = 200, description = "Updated portfolio", body = Portfolio),
        (status = 404, description = "No active portfolio", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[put("/api/portfolio")]
pub async fn patch_portfolio_handler(
    req: web::Json<PortfolioUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.patch.execute(req.into_inner()).await {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(PatchPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(PatchPortfolioError::RepositoryError(e)) => {
            error!("Repository error updating portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
