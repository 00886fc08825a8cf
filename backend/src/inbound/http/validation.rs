//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures (malformed JSON, bad query strings, non-integer path
//! identifiers) are routed through the handlers below so every rejection
//! uses the same `{"error": message}` envelope as handler errors.

use actix_web::{HttpRequest, web};

use crate::domain::{Error, USER_NOT_FOUND, UserName};

/// Convert an optional raw name into a [`UserName`].
///
/// Absent and empty values are both treated as missing and rejected with
/// `message`.
pub(crate) fn required_name(value: Option<String>, message: &'static str) -> Result<UserName, Error> {
    value
        .and_then(|raw| UserName::new(raw).ok())
        .ok_or_else(|| Error::invalid_request(message))
}

fn json_error(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid JSON body: {err}")).into()
}

fn query_error(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query string: {err}")).into()
}

// Integer routes answer 404 for identifiers that do not parse.
fn path_error(_err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::not_found(USER_NOT_FOUND).into()
}

/// Register extractor configurations that map parse failures to domain
/// errors.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error));
}
