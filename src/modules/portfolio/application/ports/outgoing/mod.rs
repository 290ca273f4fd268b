pub mod portfolio_repository;
pub mod project_repository;

pub use portfolio_repository::{NewPortfolioData, PortfolioRepository, PortfolioRepositoryError};
pub use project_repository::{ProjectRepository, ProjectRepositoryError};
