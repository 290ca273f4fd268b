mod add_project;
mod delete_project;
mod get_portfolio;
mod get_project;
mod init_portfolio;
mod list_projects;
mod patch_portfolio;
mod save_portfolio;
mod update_project;

pub use add_project::{AddProjectError, AddProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use get_project::{GetProjectError, GetProjectUseCase};
pub use init_portfolio::{InitPortfolioError, InitPortfolioOutcome, InitPortfolioUseCase};
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
pub use patch_portfolio::{PatchPortfolioError, PatchPortfolioUseCase};
pub use save_portfolio::{SavePortfolioError, SavePortfolioUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
