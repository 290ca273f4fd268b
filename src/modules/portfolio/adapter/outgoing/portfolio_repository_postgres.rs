use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, Statement, TransactionTrait,
};
use std::sync::Arc;

use crate::modules::portfolio::adapter::outgoing::row_mapping::{
    education_from_row, education_to_row, portfolio_from_rows, project_from_row, project_to_row,
    to_json,
};
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_education, portfolio_projects, portfolios,
};
use crate::modules::portfolio::application::ports::outgoing::{
    NewPortfolioData, PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::entities::{
    Education, Portfolio, PortfolioUpdate, Project,
};

const PORTFOLIO_COLUMNS: &str = "id, personal, tech_stack, contact, active, created_at, updated_at";

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn find_active(&self) -> Result<Option<Portfolio>, PortfolioRepositoryError> {
        let model = portfolios::Entity::find()
            .filter(portfolios::Column::Active.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match model {
            Some(model) => Ok(Some(load_children(&*self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn upsert_active(
        &self,
        data: NewPortfolioData,
    ) -> Result<Portfolio, PortfolioRepositoryError> {
        let now = data.now.fixed_offset();
        let sql = format!(
            "INSERT INTO portfolios ({PORTFOLIO_COLUMNS}) \
             VALUES ($1, $2, $3, $4, TRUE, $5, $5) \
             ON CONFLICT (active) WHERE active DO UPDATE SET \
             personal = EXCLUDED.personal, \
             tech_stack = EXCLUDED.tech_stack, \
             contact = EXCLUDED.contact, \
             updated_at = EXCLUDED.updated_at \
             RETURNING {PORTFOLIO_COLUMNS}"
        );
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                data.id.into(),
                to_json(&data.personal).map_err(map_json_err)?.into(),
                to_json(&data.tech_stack).map_err(map_json_err)?.into(),
                to_json(&data.contact).map_err(map_json_err)?.into(),
                now.into(),
            ],
        );

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = portfolios::Entity::find()
            .from_raw_sql(stmt)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                PortfolioRepositoryError::DatabaseError("upsert returned no row".to_string())
            })?;

        portfolio_projects::Entity::delete_many()
            .filter(portfolio_projects::Column::PortfolioId.eq(model.id.clone()))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        portfolio_education::Entity::delete_many()
            .filter(portfolio_education::Column::PortfolioId.eq(model.id.clone()))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        insert_children(&txn, &model.id, &data.projects, &data.education).await?;

        txn.commit().await.map_err(map_db_err)?;

        portfolio_from_rows(model, data.projects, data.education).map_err(map_json_err)
    }

    async fn patch_active(
        &self,
        data: PortfolioUpdate,
        updated_at: DateTime<Utc>,
    ) -> Result<Portfolio, PortfolioRepositoryError> {
        if data.is_empty() {
            return self
                .find_active()
                .await?
                .ok_or(PortfolioRepositoryError::NotFound);
        }

        let mut model = <portfolios::ActiveModel as Default>::default();

        if let Some(personal) = &data.personal {
            model.personal = Set(to_json(personal).map_err(map_json_err)?);
        }

        if let Some(tech_stack) = &data.tech_stack {
            model.tech_stack = Set(to_json(tech_stack).map_err(map_json_err)?);
        }

        if let Some(contact) = &data.contact {
            model.contact = Set(to_json(contact).map_err(map_json_err)?);
        }

        model.updated_at = Set(updated_at.fixed_offset());

        let updated = portfolios::Entity::update_many()
            .set(model)
            .filter(portfolios::Column::Active.eq(true))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(PortfolioRepositoryError::NotFound)?;

        load_children(&*self.db, updated).await
    }

    async fn insert_if_absent(
        &self,
        portfolio: Portfolio,
    ) -> Result<bool, PortfolioRepositoryError> {
        let sql = format!(
            "INSERT INTO portfolios ({PORTFOLIO_COLUMNS}) \
             VALUES ($1, $2, $3, $4, TRUE, $5, $6) \
             ON CONFLICT DO NOTHING \
             RETURNING {PORTFOLIO_COLUMNS}"
        );
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                portfolio.id.clone().into(),
                to_json(&portfolio.personal).map_err(map_json_err)?.into(),
                to_json(&portfolio.tech_stack).map_err(map_json_err)?.into(),
                to_json(&portfolio.contact).map_err(map_json_err)?.into(),
                portfolio.created_at.fixed_offset().into(),
                portfolio.updated_at.fixed_offset().into(),
            ],
        );

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = portfolios::Entity::find()
            .from_raw_sql(stmt)
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        if inserted.is_none() {
            txn.rollback().await.map_err(map_db_err)?;
            return Ok(false);
        }

        insert_children(&txn, &portfolio.id, &portfolio.projects, &portfolio.education).await?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(true)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn load_children<C>(
    conn: &C,
    model: portfolios::Model,
) -> Result<Portfolio, PortfolioRepositoryError>
where
    C: ConnectionTrait,
{
    let projects = portfolio_projects::Entity::find()
        .filter(portfolio_projects::Column::PortfolioId.eq(model.id.clone()))
        .order_by_asc(portfolio_projects::Column::Position)
        .all(conn)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(project_from_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(map_json_err)?;

    let education = portfolio_education::Entity::find()
        .filter(portfolio_education::Column::PortfolioId.eq(model.id.clone()))
        .order_by_asc(portfolio_education::Column::Position)
        .all(conn)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(education_from_row)
        .collect();

    portfolio_from_rows(model, projects, education).map_err(map_json_err)
}

async fn insert_children<C>(
    conn: &C,
    portfolio_id: &str,
    projects: &[Project],
    education: &[Education],
) -> Result<(), PortfolioRepositoryError>
where
    C: ConnectionTrait,
{
    // Rows are inserted in list order so the identity column preserves it.
    if !projects.is_empty() {
        let rows = projects
            .iter()
            .map(|p| project_to_row(portfolio_id, p))
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_json_err)?;

        portfolio_projects::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await
            .map_err(map_db_err)?;
    }

    if !education.is_empty() {
        let rows = education
            .iter()
            .map(|e| education_to_row(portfolio_id, e))
            .collect::<Vec<_>>();

        portfolio_education::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await
            .map_err(map_db_err)?;
    }

    Ok(())
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> PortfolioRepositoryError {
    PortfolioRepositoryError::SerializationError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
