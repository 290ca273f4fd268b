// src/modules/portfolio/application/ports/outgoing/portfolio_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::portfolio::domain::entities::{
    Contact, Education, PersonalInfo, Portfolio, PortfolioUpdate, Project, TechStack,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Full content for the active portfolio.
///
/// `id` is only used when no active portfolio exists yet; on replacement the
/// stored identifier and `created_at` are kept.
#[derive(Debug, Clone)]
pub struct NewPortfolioData {
    pub id: String,
    pub personal: PersonalInfo,
    pub tech_stack: TechStack,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub contact: Contact,
    pub now: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (active portfolio singleton)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn find_active(&self) -> Result<Option<Portfolio>, PortfolioRepositoryError>;

    /// Creates the active portfolio, or replaces the content of the existing
    /// one (personal, tech stack, projects, education, contact) in a single
    /// atomic step.
    async fn upsert_active(
        &self,
        data: NewPortfolioData,
    ) -> Result<Portfolio, PortfolioRepositoryError>;

    /// Applies only the fields present in `data`.
    /// Returns `NotFound` if no portfolio is active.
    async fn patch_active(
        &self,
        data: PortfolioUpdate,
        updated_at: DateTime<Utc>,
    ) -> Result<Portfolio, PortfolioRepositoryError>;

    /// Inserts `portfolio` as the active one unless an active portfolio
    /// already exists. Returns whether the insert happened.
    async fn insert_if_absent(&self, portfolio: Portfolio)
        -> Result<bool, PortfolioRepositoryError>;
}
