use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, InitPortfolioResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Seed the default portfolio
///
/// Only the first call on an empty store writes anything.
#[utoipa::path(
    post,
    path = "/api/init-portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Seeded, or already present",
            body = InitPortfolioResponse,
            examples(
                ("Seeded" = (value = json!({
                    "message": "Portfolio initialized successfully",
                    "portfolio_id": "nishant_portfolio_2025"
                }))),
                ("Already present" = (value = json!({ "message": "Portfolio already exists" })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/init-portfolio")]
pub async fn init_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.init.execute().await {
        Ok(outcome) => ApiResponse::success(InitPortfolioResponse {
            message: outcome.message().to_string(),
            portfolio_id: outcome.portfolio_id().map(str::to_string),
        }),
        Err(e) => {
            error!("Failed to initialize portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::ports::incoming::use_cases::{
        InitPortfolioError, InitPortfolioOutcome, InitPortfolioUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    struct MockInitPortfolioUseCase {
        result: Result<InitPortfolioOutcome, InitPortfolioError>,
    }

    #[async_trait]
    impl InitPortfolioUseCase for MockInitPortfolioUseCase {
        async fn execute(&self) -> Result<InitPortfolioOutcome, InitPortfolioError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<InitPortfolioOutcome, InitPortfolioError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_init_portfolio(MockInitPortfolioUseCase { result })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(init_portfolio_handler))
                .await;

        let req = test::TestRequest::post().uri("/api/init-portfolio").to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_init_portfolio_first_call() {
        let (status, body) = call(Ok(InitPortfolioOutcome::Initialized {
            portfolio_id: "nishant_portfolio_2025".to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Portfolio initialized successfully");
        assert_eq!(body["portfolio_id"], "nishant_portfolio_2025");
    }

    #[actix_web::test]
    async fn test_init_portfolio_already_exists() {
        let (status, body) = call(Ok(InitPortfolioOutcome::AlreadyExists)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Portfolio already exists");
        assert!(body.get("portfolio_id").is_none());
    }

    #[actix_web::test]
    async fn test_init_portfolio_repository_error() {
        let (status, _) = call(Err(InitPortfolioError::RepositoryError(
            "db down".to_string(),
        )))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
