//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use roster::Trace;
#[cfg(debug_assertions)]
use roster::doc::ApiDoc;
use roster::domain::ports::UserRepository;
use roster::inbound::http::health::{HealthState, live, ready};
use roster::inbound::http::state::HttpState;
use roster::inbound::http::users::{create_user, delete_user, get_user, list_users};
use roster::outbound::persistence::{
    DbPool, DieselUserRepository, InMemoryUserRepository, PoolConfig,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Select the user store from configuration.
///
/// Uses the Diesel adapter when a database URL is configured, otherwise the
/// in-memory store. Records do not survive a restart without a database.
async fn build_user_repository(config: &ServerConfig) -> std::io::Result<Arc<dyn UserRepository>> {
    match &config.database_url {
        Some(url) => {
            let pool = DbPool::new(PoolConfig::new(url)).await.map_err(|err| {
                std::io::Error::other(format!("database pool setup failed: {err}"))
            })?;
            info!("using the PostgreSQL user store");
            Ok(Arc::new(DieselUserRepository::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set; falling back to the in-memory user store");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(delete_user);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        // The directory is consumed by browser frontends on other origins.
        .wrap(Cors::permissive())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// The repository handle is built once here and shared by every worker.
///
/// # Errors
/// Propagates [`std::io::Error`] when pool construction or socket binding
/// fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let users = build_user_repository(&config).await?;
    let http_state = web::Data::new(HttpState::new(users));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
