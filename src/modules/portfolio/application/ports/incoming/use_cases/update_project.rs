use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::{Project, ProjectCreate};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Portfolio not found")]
    PortfolioNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Full replacement of one project. Fields missing from `input` fall back to
/// their defaults rather than keeping the stored values.
#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: String,
        input: ProjectCreate,
    ) -> Result<Project, UpdateProjectError>;
}
