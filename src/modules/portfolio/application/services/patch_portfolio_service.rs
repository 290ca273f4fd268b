use async_trait::async_trait;
use chrono::Utc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    PatchPortfolioError, PatchPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::entities::{Portfolio, PortfolioUpdate};

pub struct PatchPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> PatchPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchPortfolioUseCase for PatchPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, update: PortfolioUpdate) -> Result<Portfolio, PatchPortfolioError> {
        self.repository
            .patch_active(update, Utc::now())
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => PatchPortfolioError::NotFound,
                other => PatchPortfolioError::RepositoryError(other.to_string()),
            })
    }
}
