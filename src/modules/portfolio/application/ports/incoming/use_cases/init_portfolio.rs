use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitPortfolioOutcome {
    Initialized { portfolio_id: String },
    AlreadyExists,
}

impl InitPortfolioOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            InitPortfolioOutcome::Initialized { .. } => "Portfolio initialized successfully",
            InitPortfolioOutcome::AlreadyExists => "Portfolio already exists",
        }
    }

    /// Id of the record written by this call, if any.
    pub fn portfolio_id(&self) -> Option<&str> {
        match self {
            InitPortfolioOutcome::Initialized { portfolio_id } => Some(portfolio_id.as_str()),
            InitPortfolioOutcome::AlreadyExists => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum InitPortfolioError {
    InvalidDefaults(String),
    RepositoryError(String),
}

impl fmt::Display for InitPortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitPortfolioError::InvalidDefaults(msg) => {
                write!(f, "invalid default portfolio: {}", msg)
            }
            InitPortfolioError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Seeds the default portfolio once. Later calls are no-ops.
#[async_trait]
pub trait InitPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<InitPortfolioOutcome, InitPortfolioError>;
}
