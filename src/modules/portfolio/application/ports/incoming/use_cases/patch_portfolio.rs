use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::{Portfolio, PortfolioUpdate};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchPortfolioError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchPortfolioUseCase: Send + Sync {
    async fn execute(&self, update: PortfolioUpdate) -> Result<Portfolio, PatchPortfolioError>;
}
