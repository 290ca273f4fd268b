use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Portfolio not found")]
    PortfolioNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, ListProjectsError>;
}
