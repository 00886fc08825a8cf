//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServiceSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use user_service::Trace;
use user_service::domain::UserAccountsService;
use user_service::inbound::http::health::{HealthState, live, ready};
use user_service::inbound::http::state::HttpState;
use user_service::inbound::http::{configure, not_found};
use user_service::outbound::persistence::{DbPool, DieselUserRepository};

/// Wire the user accounts service to the Diesel repository.
fn build_http_state(pool: DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselUserRepository::new(pool));
    web::Data::new(HttpState::new(Arc::new(UserAccountsService::new(
        repository,
    ))))
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
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live)
        .default_service(web::to(not_found))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        db_pool,
        workers,
    } = config;
    let http_state = build_http_state(db_pool);

    let mut server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    let server = server.bind(bind_addr)?.run();

    health_state.mark_ready();
    Ok(server)
}
