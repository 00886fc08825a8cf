//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub mod users_dto;
pub mod validation;

use actix_web::web;

use crate::domain::Error;

pub use error::ApiResult;

/// Fallback for unmatched routes so clients always receive a JSON body.
pub async fn not_found() -> ApiResult<web::Json<()>> {
    Err(Error::not_found("Not found"))
}

/// Register extractor configuration, the root greeting, and the users
/// endpoints.
///
/// Health probes need a [`health::HealthState`] and are registered by the
/// server alongside this.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    validation::configure_extractors(cfg);
    cfg.service(health::hello);
    users::configure_users(cfg);
}
