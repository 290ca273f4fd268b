pub mod default_portfolio;
pub mod portfolio_use_cases;
pub mod ports;
pub mod services;
