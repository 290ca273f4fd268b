use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SavePortfolioError, SavePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    NewPortfolioData, PortfolioRepository,
};
use crate::modules::portfolio::domain::entities::{
    Education, Portfolio, PortfolioCreate, Project,
};

pub struct SavePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> SavePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SavePortfolioUseCase for SavePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, input: PortfolioCreate) -> Result<Portfolio, SavePortfolioError> {
        let now = Utc::now();

        let data = NewPortfolioData {
            id: Uuid::new_v4().to_string(),
            personal: input.personal,
            tech_stack: input.tech_stack,
            projects: input
                .projects
                .into_iter()
                .map(|p| Project::create(p, now))
                .collect(),
            education: input
                .education
                .into_iter()
                .map(|e| Education::create(e, now))
                .collect(),
            contact: input.contact,
            now,
        };

        let portfolio = self
            .repository
            .upsert_active(data)
            .await
            .map_err(|e| SavePortfolioError::RepositoryError(e.to_string()))?;

        info!(
            portfolio_id = %portfolio.id,
            projects = portfolio.projects.len(),
            "Active portfolio saved"
        );

        Ok(portfolio)
    }
}
