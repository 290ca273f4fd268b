// src/modules/portfolio/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Portfolio not found")]
    PortfolioNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Projects embedded in the active portfolio.
///
/// Every mutation targets a single project row; the collection is never read
/// and written back as a whole.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Projects in insertion order.
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Appends `project` at the end of the collection.
    async fn add(&self, project: Project) -> Result<Project, ProjectRepositoryError>;

    async fn get(&self, project_id: &str) -> Result<Project, ProjectRepositoryError>;

    /// Overwrites the project with the same id, keeping its position.
    async fn replace(&self, project: Project) -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, project_id: &str) -> Result<(), ProjectRepositoryError>;
}
