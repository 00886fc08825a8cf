//! Backend entry-point: loads settings, opens the user store, and serves the
//! users REST API.

mod server;

use std::env;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServiceSettings, create_server};
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("USERS_BIND_ADDR is not a socket address")?;

    let pool_config = PoolConfig::new(settings.database_url.as_str())
        .with_connection_timeout(settings.pool_timeout());
    let db_pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to open the user store")?;

    let mut config = ServerConfig::new(bind_addr, db_pool);
    if let Some(workers) = settings.workers {
        config = config.with_workers(workers);
    }

    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "user service listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result.wrap_err("server terminated unexpectedly")
}
