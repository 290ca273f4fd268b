use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::portfolio::adapter::outgoing::row_mapping::{
    project_from_row, project_to_row, to_json,
};
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_projects::{self, Column, Entity},
    portfolios,
};
use crate::modules::portfolio::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::portfolio::domain::entities::Project;

/// Single-row operations on the projects of the active portfolio.
#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn active_portfolio_id(&self) -> Result<String, ProjectRepositoryError> {
        portfolios::Entity::find()
            .filter(portfolios::Column::Active.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|model| model.id)
            .ok_or(ProjectRepositoryError::PortfolioNotFound)
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let portfolio_id = self.active_portfolio_id().await?;

        Entity::find()
            .filter(Column::PortfolioId.eq(portfolio_id))
            .order_by_asc(Column::Position)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|row| project_from_row(row).map_err(map_json_err))
            .collect()
    }

    async fn add(&self, project: Project) -> Result<Project, ProjectRepositoryError> {
        let portfolio_id = self.active_portfolio_id().await?;
        let row = project_to_row(&portfolio_id, &project).map_err(map_json_err)?;

        let inserted = row.insert(&*self.db).await.map_err(map_db_err)?;

        project_from_row(inserted).map_err(map_json_err)
    }

    async fn get(&self, project_id: &str) -> Result<Project, ProjectRepositoryError> {
        let portfolio_id = self.active_portfolio_id().await?;

        let row = Entity::find()
            .filter(Column::PortfolioId.eq(portfolio_id))
            .filter(Column::Id.eq(project_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::ProjectNotFound)?;

        project_from_row(row).map_err(map_json_err)
    }

    async fn replace(&self, project: Project) -> Result<Project, ProjectRepositoryError> {
        let portfolio_id = self.active_portfolio_id().await?;

        // Key and position stay; every other column is overwritten.
        let model = portfolio_projects::ActiveModel {
            name: Set(project.name),
            description: Set(project.description),
            details: Set(project.details),
            technologies: Set(to_json(&project.technologies).map_err(map_json_err)?),
            live_link: Set(project.live_link),
            github_link: Set(project.github_link),
            image: Set(project.image),
            featured: Set(project.featured),
            created_at: Set(project.created_at.fixed_offset()),
            ..Default::default()
        };

        let row = Entity::update_many()
            .set(model)
            .filter(Column::PortfolioId.eq(portfolio_id))
            .filter(Column::Id.eq(project.id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::ProjectNotFound)?;

        project_from_row(row).map_err(map_json_err)
    }

    async fn delete(&self, project_id: &str) -> Result<(), ProjectRepositoryError> {
        let portfolio_id = self.active_portfolio_id().await?;

        let result = Entity::delete_many()
            .filter(Column::PortfolioId.eq(portfolio_id))
            .filter(Column::Id.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::ProjectNotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> ProjectRepositoryError {
    ProjectRepositoryError::SerializationError(e.to_string())
}
