mod create_project;
mod delete_project;
mod get_portfolio;
mod get_project;
mod get_projects;
mod init_portfolio;
mod patch_portfolio;
mod save_portfolio;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_portfolio::*;
pub use get_project::*;
pub use get_projects::*;
pub use init_portfolio::*;
pub use patch_portfolio::*;
pub use save_portfolio::*;
pub use update_project::*;
