mod add_project_service;
mod delete_project_service;
mod get_portfolio_service;
mod get_project_service;
mod init_portfolio_service;
mod list_projects_service;
mod patch_portfolio_service;
mod save_portfolio_service;
mod update_project_service;

pub use add_project_service::AddProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_portfolio_service::GetPortfolioService;
pub use get_project_service::GetProjectService;
pub use init_portfolio_service::InitPortfolioService;
pub use list_projects_service::ListProjectsService;
pub use patch_portfolio_service::PatchPortfolioService;
pub use save_portfolio_service::SavePortfolioService;
pub use update_project_service::UpdateProjectService;
