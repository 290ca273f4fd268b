use async_trait::async_trait;
use tracing::info;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: String) -> Result<(), DeleteProjectError> {
        self.repository
            .delete(&project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::PortfolioNotFound => DeleteProjectError::PortfolioNotFound,
                ProjectRepositoryError::ProjectNotFound => DeleteProjectError::ProjectNotFound,
                other => DeleteProjectError::RepositoryError(other.to_string()),
            })?;

        info!(project_id = %project_id, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::InMemoryPortfolioStore;

    #[tokio::test]
    async fn test_execute_removes_only_target() {
        let store = InMemoryPortfolioStore::seeded();
        let service = DeleteProjectService::new(store.clone());

        service.execute("weathere_project".to_string()).await.unwrap();

        let ids: Vec<_> = store
            .snapshot()
            .unwrap()
            .projects
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["wechat_project", "dropcraft_project"]);
    }

    #[tokio::test]
    async fn test_execute_twice_reports_not_found() {
        let service = DeleteProjectService::new(InMemoryPortfolioStore::seeded());

        service.execute("wechat_project".to_string()).await.unwrap();
        let result = service.execute("wechat_project".to_string()).await;

        assert!(matches!(result, Err(DeleteProjectError::ProjectNotFound)));
    }
}
