pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::services::{
    ListMessagesService, MarkMessageRepliedService, SubmitMessageService,
};
use crate::modules::portfolio::adapter::outgoing::{
    PortfolioRepositoryPostgres, ProjectRepositoryPostgres,
};
use crate::modules::portfolio::application::portfolio_use_cases::{
    PortfolioUseCases, ProjectUseCases,
};
use crate::modules::portfolio::application::services::{
    AddProjectService, DeleteProjectService, GetPortfolioService, GetProjectService,
    InitPortfolioService, ListProjectsService, PatchPortfolioService, SavePortfolioService,
    UpdateProjectService,
};
use crate::shared::api::custom_json_config;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub project: ProjectUseCases,
    pub contact: ContactUseCases,
}

impl AppState {
    /// Wires every use case to the Postgres adapters.
    pub fn postgres(db: Arc<DatabaseConnection>) -> Self {
        let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db));
        let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let contact_repo = ContactMessageRepositoryPostgres::new(db);

        Self {
            portfolio: PortfolioUseCases {
                get: Arc::new(GetPortfolioService::new(portfolio_repo.clone())),
                save: Arc::new(SavePortfolioService::new(portfolio_repo.clone())),
                patch: Arc::new(PatchPortfolioService::new(portfolio_repo.clone())),
                init: Arc::new(InitPortfolioService::new(portfolio_repo)),
            },
            project: ProjectUseCases {
                list: Arc::new(ListProjectsService::new(project_repo.clone())),
                add: Arc::new(AddProjectService::new(project_repo.clone())),
                get: Arc::new(GetProjectService::new(project_repo.clone())),
                update: Arc::new(UpdateProjectService::new(project_repo.clone())),
                delete: Arc::new(DeleteProjectService::new(project_repo)),
            },
            contact: ContactUseCases {
                submit: Arc::new(SubmitMessageService::new(contact_repo.clone())),
                list: Arc::new(ListMessagesService::new(contact_repo.clone())),
                mark_replied: Arc::new(MarkMessageRepliedService::new(contact_repo)),
            },
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .set_schema_search_path(config.db_name.clone())
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    // DB_NAME is checked to be a plain identifier, so quoting it is enough
    conn.execute_unprepared(&format!(
        "CREATE SCHEMA IF NOT EXISTS \"{}\"",
        config.db_name
    ))
    .await
    .context("failed to create database schema")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!(schema = %config.db_name, "Migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = AppState::postgres(Arc::clone(&db_arc));

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)?
    .run()
    .await?;

    db_arc
        .close_by_ref()
        .await
        .context("failed to close database connection")?;
    info!("Database connection closed");

    Ok(())
}

/// Any origin, method and header, with credentials allowed.
fn cors() -> Cors {
    Cors::permissive()
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::root);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::init_portfolio_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::save_portfolio_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::patch_portfolio_handler);
    // Projects
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::get_project_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::modules::portfolio::adapter::incoming::web::routes::delete_project_handler);
    // Contact
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler,
    );
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::get_contact_messages_handler,
    );
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::mark_message_replied_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
