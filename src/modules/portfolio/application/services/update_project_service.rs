use async_trait::async_trait;
use chrono::Utc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::portfolio::domain::entities::{Project, ProjectCreate};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: String,
        input: ProjectCreate,
    ) -> Result<Project, UpdateProjectError> {
        let project = Project::replacing(project_id, input, Utc::now());

        self.repository
            .replace(project)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::PortfolioNotFound => UpdateProjectError::PortfolioNotFound,
                ProjectRepositoryError::ProjectNotFound => UpdateProjectError::ProjectNotFound,
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })
    }
}
