use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::{Portfolio, PortfolioCreate};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SavePortfolioError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Create-or-replace of the active portfolio.
///
/// When a portfolio is already active its content is replaced wholesale:
/// projects and education not present in the input are dropped.
#[async_trait]
pub trait SavePortfolioUseCase: Send + Sync {
    async fn execute(&self, input: PortfolioCreate) -> Result<Portfolio, SavePortfolioError>;
}
