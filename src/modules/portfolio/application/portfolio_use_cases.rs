use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    AddProjectUseCase, DeleteProjectUseCase, GetPortfolioUseCase, GetProjectUseCase,
    InitPortfolioUseCase, ListProjectsUseCase, PatchPortfolioUseCase, SavePortfolioUseCase,
    UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub save: Arc<dyn SavePortfolioUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchPortfolioUseCase + Send + Sync>,
    pub init: Arc<dyn InitPortfolioUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub add: Arc<dyn AddProjectUseCase + Send + Sync>,
    pub get: Arc<dyn GetProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}
