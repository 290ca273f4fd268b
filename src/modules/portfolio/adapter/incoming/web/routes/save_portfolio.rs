use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::application::ports::incoming::use_cases::SavePortfolioError;
use crate::modules::portfolio::domain::entities::{Portfolio, PortfolioCreate};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create or replace the active portfolio
///
/// An existing active portfolio keeps its id and `created_at`; everything
/// else, including the embedded projects and education, is replaced.
#[utoipa::path(
    post,
    path = "/api/portfolio",
    tag = "portfolio",
    request_body = PortfolioCreate,
    responses(
        (status = 200, description = "Stored portfolio", body = Portfolio),
        (
            status = 422,
            description = "Malformed body or invalid contact email",
            body = ErrorResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/portfolio")]
pub async fn save_portfolio_handler(
    req: web::Json<PortfolioCreate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.save.execute(req.into_inner()).await {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(SavePortfolioError::RepositoryError(e)) => {
            error!("Repository error saving portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}
