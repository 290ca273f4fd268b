use crate::api::schemas::{ErrorDetail, ErrorResponse, InitPortfolioResponse, MessageResponse};
use crate::health::{LivenessResponse, ReadinessResponse};
use crate::modules::contact::domain::entities::{ContactMessage, ContactMessageCreate};
use crate::modules::portfolio::domain::entities::{
    Contact, Education, EducationCreate, PersonalInfo, Portfolio, PortfolioCreate,
    PortfolioUpdate, Project, ProjectCreate, TechStack,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Backend of a personal portfolio website: the active portfolio, its projects and the contact form inbox"
    ),
    paths(
        // Health endpoints
        crate::health::root,
        crate::health::readiness,

        // Portfolio endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::init_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::save_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::patch_portfolio_handler,

        // Project endpoints
        crate::modules::portfolio::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::create_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::update_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::delete_project_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler,
        crate::modules::contact::adapter::incoming::web::routes::get_contact_messages_handler,
        crate::modules::contact::adapter::incoming::web::routes::mark_message_replied_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,
            InitPortfolioResponse,
            LivenessResponse,
            ReadinessResponse,

            // Portfolio
            Portfolio,
            PortfolioCreate,
            PortfolioUpdate,
            PersonalInfo,
            TechStack,
            Contact,
            Project,
            ProjectCreate,
            Education,
            EducationCreate,

            // Contact
            ContactMessage,
            ContactMessageCreate
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "portfolio", description = "Active portfolio endpoints"),
        (name = "projects", description = "Project management endpoints"),
        (name = "contact", description = "Contact form endpoints"),
    )
)]
pub struct ApiDoc;
