use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::portfolio::domain::entities::Project;

pub struct ListProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ListProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ListProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, ListProjectsError> {
        self.repository.list().await.map_err(|e| match e {
            ProjectRepositoryError::PortfolioNotFound => ListProjectsError::PortfolioNotFound,
            other => ListProjectsError::RepositoryError(other.to_string()),
        })
    }
}
