//! Server construction and adapter wiring.

mod config;

pub use config::{IdentityBackend, ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::AccountsService;
use backend::domain::ports::AuthenticationService;
use backend::inbound::http::accounts::{signin, signup};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::DieselIdentityStore;
use backend::outbound::{Argon2CredentialHasher, InMemoryIdentityStore};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the authentication service over the selected identity store.
fn build_auth_service(backend: IdentityBackend) -> Arc<dyn AuthenticationService> {
    let hasher = Arc::new(Argon2CredentialHasher::new());
    match backend {
        IdentityBackend::Postgres(pool) => {
            info!(store = "postgres", "identity store configured");
            Arc::new(AccountsService::new(
                Arc::new(DieselIdentityStore::new(pool)),
                hasher,
            ))
        }
        IdentityBackend::InMemory => {
            info!(store = "memory", "identity store configured; data is not persisted");
            Arc::new(AccountsService::new(
                Arc::new(InMemoryIdentityStore::new()),
                hasher,
            ))
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
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1").service(signup).service(signin);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, backend } = config;
    let http_state = web::Data::new(HttpState::new(build_auth_service(backend)));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "accounts server listening");
    health_state.mark_ready();
    Ok(server)
}
