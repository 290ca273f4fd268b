use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::modules::portfolio::domain::entities::Portfolio;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch the active portfolio
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Active portfolio", body = Portfolio),
        (
            status = 404,
            description = "No active portfolio",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PORTFOLIO_NOT_FOUND", "message": "Portfolio not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get.execute().await {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(GetPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(GetPortfolioError::RepositoryError(e)) => {
            error!("Repository error fetching portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
