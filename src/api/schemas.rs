// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "PORTFOLIO_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Portfolio not found")]
    pub message: String,
}

/// Plain acknowledgement returned by commands without a resource body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Project deleted successfully")]
    pub message: String,
}

/// Answer of the seed endpoint. `portfolio_id` is only present when this call
/// created the record.
#[derive(Serialize, ToSchema)]
pub struct InitPortfolioResponse {
    #[schema(example = "Portfolio initialized successfully")]
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "nishant_portfolio_2025")]
    pub portfolio_id: Option<String>,
}
