use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("Portfolio not found")]
    PortfolioNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: String) -> Result<Project, GetProjectError>;
}
