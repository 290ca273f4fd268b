use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::portfolio::application::default_portfolio::default_portfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    InitPortfolioError, InitPortfolioOutcome, InitPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;

pub struct InitPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> InitPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> InitPortfolioUseCase for InitPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<InitPortfolioOutcome, InitPortfolioError> {
        let portfolio = default_portfolio(Utc::now())
            .map_err(|e| InitPortfolioError::InvalidDefaults(e.to_string()))?;
        let portfolio_id = portfolio.id.clone();

        let inserted = self
            .repository
            .insert_if_absent(portfolio)
            .await
            .map_err(|e| InitPortfolioError::RepositoryError(e.to_string()))?;

        if inserted {
            info!(portfolio_id = %portfolio_id, "Default portfolio seeded");
            Ok(InitPortfolioOutcome::Initialized { portfolio_id })
        } else {
            Ok(InitPortfolioOutcome::AlreadyExists)
        }
    }
}
