use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    AddProjectError, AddProjectUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::portfolio::domain::entities::{Project, ProjectCreate};

pub struct AddProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> AddProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddProjectUseCase for AddProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, input: ProjectCreate) -> Result<Project, AddProjectError> {
        let project = Project::create(input, Utc::now());

        let saved = self.repository.add(project).await.map_err(|e| match e {
            ProjectRepositoryError::PortfolioNotFound => AddProjectError::PortfolioNotFound,
            other => AddProjectError::RepositoryError(other.to_string()),
        })?;

        info!(project_id = %saved.id, "Project added");
        Ok(saved)
    }
}
