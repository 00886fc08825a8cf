//! Users API handlers.
//!
//! ```text
//! POST   /users            {"name":"Alice"}
//! GET    /users?name=Alice
//! GET    /users/1
//! PUT    /users?name=Alice {"name":"Alicia"}
//! PUT    /users/1          {"name":"Alicia"}
//! DELETE /users?name=Alicia
//! DELETE /users/1
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users_dto::{MessageResponse, NameQuery, UserNamePayload};
use crate::inbound::http::validation::required_name;

const NAME_REQUIRED: &str = "Name is required";
const NAME_QUERY_REQUIRED: &str = "Name query parameter is required";
const BOTH_NAMES_REQUIRED: &str = "Both old and new names are required";
const NEW_NAME_REQUIRED: &str = "New name is required in the request body";
const USER_DELETED: &str = "User deleted successfully";

/// Create a user.
///
/// Responds `201` with `{id, name}`; `400` when the name is missing or
/// already taken.
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserNamePayload>,
) -> ApiResult<HttpResponse> {
    let name = required_name(payload.into_inner().name, NAME_REQUIRED)?;
    let user = state.users.register(name).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch a user by exact name.
#[get("/users")]
pub async fn get_user_by_name(
    state: web::Data<HttpState>,
    query: web::Query<NameQuery>,
) -> ApiResult<web::Json<User>> {
    let name = required_name(query.into_inner().name, NAME_QUERY_REQUIRED)?;
    let user = state.users.find_by_name(&name).await?;
    Ok(web::Json(user))
}

/// Fetch a user by identifier.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::users::get_user_by_id;
///
/// let app = App::new().service(get_user_by_id);
/// ```
#[get("/users/{id}")]
pub async fn get_user_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.find_by_id(UserId::new(path.into_inner())).await?;
    Ok(web::Json(user))
}

// An absent or unreadable body on a rename means the new name is missing.
fn new_name_from(payload: Option<web::Json<UserNamePayload>>) -> Option<String> {
    payload.and_then(|body| body.into_inner().name)
}

/// Rename the user addressed by the `name` query parameter.
#[put("/users")]
pub async fn update_user_by_name(
    state: web::Data<HttpState>,
    query: web::Query<NameQuery>,
    payload: Option<web::Json<UserNamePayload>>,
) -> ApiResult<web::Json<User>> {
    let current = required_name(query.into_inner().name, BOTH_NAMES_REQUIRED)?;
    let new_name = required_name(new_name_from(payload), BOTH_NAMES_REQUIRED)?;
    let user = state.users.rename_by_name(&current, new_name).await?;
    Ok(web::Json(user))
}

/// Rename the user with the given identifier.
#[put("/users/{id}")]
pub async fn update_user_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: Option<web::Json<UserNamePayload>>,
) -> ApiResult<web::Json<User>> {
    let new_name = required_name(new_name_from(payload), NEW_NAME_REQUIRED)?;
    let user = state
        .users
        .rename_by_id(UserId::new(path.into_inner()), new_name)
        .await?;
    Ok(web::Json(user))
}

/// Delete the user addressed by the `name` query parameter.
#[delete("/users")]
pub async fn delete_user_by_name(
    state: web::Data<HttpState>,
    query: web::Query<NameQuery>,
) -> ApiResult<web::Json<MessageResponse>> {
    let name = required_name(query.into_inner().name, NAME_QUERY_REQUIRED)?;
    let removed = state.users.remove_by_name(&name).await?;
    Ok(web::Json(MessageResponse::new(format!(
        "User {} deleted successfully",
        removed.name()
    ))))
}

/// Delete the user with the given identifier.
#[delete("/users/{id}")]
pub async fn delete_user_by_id(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .users
        .remove_by_id(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(MessageResponse::new(USER_DELETED)))
}

/// Register every users endpoint.
pub fn configure_users(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(get_user_by_name)
        .service(get_user_by_id)
        .service(update_user_by_name)
        .service(update_user_by_id)
        .service(delete_user_by_name)
        .service(delete_user_by_id);
}

#[cfg(test)]
mod tests;
