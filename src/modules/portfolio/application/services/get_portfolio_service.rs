use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::portfolio::domain::entities::Portfolio;

pub struct GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPortfolioUseCase for GetPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Portfolio, GetPortfolioError> {
        self.repository
            .find_active()
            .await
            .map_err(|e| GetPortfolioError::RepositoryError(e.to_string()))?
            .ok_or(GetPortfolioError::NotFound)
    }
}
