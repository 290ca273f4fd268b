mod portfolio_repository_postgres;
mod project_repository_postgres;
mod row_mapping;
pub mod sea_orm_entity;

pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
