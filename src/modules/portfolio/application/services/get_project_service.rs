use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetProjectError, GetProjectUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::portfolio::domain::entities::Project;

pub struct GetProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProjectUseCase for GetProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: String) -> Result<Project, GetProjectError> {
        self.repository
            .get(&project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::PortfolioNotFound => GetProjectError::PortfolioNotFound,
                ProjectRepositoryError::ProjectNotFound => GetProjectError::ProjectNotFound,
                other => GetProjectError::RepositoryError(other.to_string()),
            })
    }
}
