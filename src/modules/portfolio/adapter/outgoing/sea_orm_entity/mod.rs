pub mod portfolio_education;
pub mod portfolio_projects;
pub mod portfolios;
