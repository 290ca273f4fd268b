use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::{Project, ProjectCreate};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddProjectError {
    #[error("Portfolio not found")]
    PortfolioNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddProjectUseCase: Send + Sync {
    async fn execute(&self, input: ProjectCreate) -> Result<Project, AddProjectError>;
}
