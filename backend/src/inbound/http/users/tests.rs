//! Handler tests for the users endpoints using a mocked driving port.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::MockUserAccounts;
use crate::domain::{Error, User, UserId, UserName};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

fn user(id: i64, name: &str) -> User {
    User::try_from_parts(id, name).expect("valid user")
}

fn name(raw: &str) -> UserName {
    UserName::new(raw).expect("valid name")
}

fn test_app(
    users: MockUserAccounts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(Arc::new(users))))
        .configure(configure)
}

async fn send(users: MockUserAccounts, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(users)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON response body");
    (status, value)
}

#[actix_web::test]
async fn create_user_returns_created_record() {
    let mut users = MockUserAccounts::new();
    users
        .expect_register()
        .with(eq(name("Alice")))
        .times(1)
        .return_once(|_| Ok(user(1, "Alice")));

    let (status, body) = send(
        users,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "name": "Alice" }));
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "name": null }))]
#[case(json!({ "name": "" }))]
#[case(json!({ "nickname": "Alice" }))]
#[actix_web::test]
async fn create_user_requires_name(#[case] payload: Value) {
    let mut users = MockUserAccounts::new();
    users.expect_register().never();

    let (status, body) = send(
        users,
        actix_test::TestRequest::post().uri("/users").set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name is required" }));
}

#[actix_web::test]
async fn create_user_rejects_non_string_name() {
    let mut users = MockUserAccounts::new();
    users.expect_register().never();

    let (status, body) = send(
        users,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[rstest]
#[case(json!(["x"]))]
#[case(json!("x"))]
#[case(json!([{ "name": "x" }]))]
#[actix_web::test]
async fn create_user_rejects_non_object_body(#[case] payload: Value) {
    let mut users = MockUserAccounts::new();
    users.expect_register().never();

    let (status, body) = send(
        users,
        actix_test::TestRequest::post().uri("/users").set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[actix_web::test]
async fn create_user_rejects_non_json_body() {
    let users = MockUserAccounts::new();

    let (status, body) = send(
        users,
        actix_test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "text/plain"))
            .set_payload("name=Alice"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[actix_web::test]
async fn create_user_reports_duplicate_as_bad_request() {
    let mut users = MockUserAccounts::new();
    users
        .expect_register()
        .return_once(|_| Err(Error::conflict("User already exists")));

    let (status, body) = send(
        users,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "User already exists" }));
}

#[rstest]
#[case("/users")]
#[case("/users?name=")]
#[case("/users?other=Alice")]
#[actix_web::test]
async fn get_by_name_requires_query_parameter(#[case] uri: &str) {
    let mut users = MockUserAccounts::new();
    users.expect_find_by_name().never();

    let (status, body) = send(users, actix_test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name query parameter is required" }));
}

#[actix_web::test]
async fn get_by_name_decodes_query_value() {
    let mut users = MockUserAccounts::new();
    users
        .expect_find_by_name()
        .with(eq(name("Ada Lovelace")))
        .return_once(|_| Ok(user(4, "Ada Lovelace")));

    let (status, body) = send(
        users,
        actix_test::TestRequest::get().uri("/users?name=Ada%20Lovelace"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 4, "name": "Ada Lovelace" }));
}

#[actix_web::test]
async fn get_by_id_returns_not_found_body() {
    let mut users = MockUserAccounts::new();
    users
        .expect_find_by_id()
        .with(eq(UserId::new(99)))
        .return_once(|_| Err(Error::not_found("User not found")));

    let (status, body) = send(users, actix_test::TestRequest::get().uri("/users/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[rstest]
#[case("/users/abc")]
#[case("/users/1.5")]
#[case("/users/99999999999999999999")]
#[actix_web::test]
async fn non_integer_ids_are_not_found(#[case] uri: &str) {
    let mut users = MockUserAccounts::new();
    users.expect_find_by_id().never();

    let (status, body) = send(users, actix_test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[rstest]
#[case("/users", json!({ "name": "David" }))]
#[case("/users?name=Dave", json!({}))]
#[case("/users?name=", json!({ "name": "David" }))]
#[actix_web::test]
async fn update_by_name_requires_both_names(#[case] uri: &str, #[case] payload: Value) {
    let mut users = MockUserAccounts::new();
    users.expect_rename_by_name().never();

    let (status, body) = send(
        users,
        actix_test::TestRequest::put().uri(uri).set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Both old and new names are required" }));
}

#[rstest]
#[case(actix_test::TestRequest::put().uri("/users?name=Dave"))]
#[case(actix_test::TestRequest::put().uri("/users?name=Dave").set_json(json!(["David"])))]
#[case(actix_test::TestRequest::put()
    .uri("/users?name=Dave")
    .insert_header(("content-type", "text/plain"))
    .set_payload("David"))]
#[actix_web::test]
async fn update_by_name_without_usable_body_reports_missing_names(
    #[case] request: actix_test::TestRequest,
) {
    let mut users = MockUserAccounts::new();
    users.expect_rename_by_name().never();

    let (status, body) = send(users, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Both old and new names are required" }));
}

#[actix_web::test]
async fn update_by_id_without_body_reports_missing_new_name() {
    let mut users = MockUserAccounts::new();
    users.expect_rename_by_id().never();

    let (status, body) = send(users, actix_test::TestRequest::put().uri("/users/5")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "New name is required in the request body" })
    );
}

#[actix_web::test]
async fn repeated_name_parameter_uses_first_value() {
    let mut users = MockUserAccounts::new();
    users
        .expect_find_by_name()
        .with(eq(name("Alice")))
        .return_once(|_| Ok(user(1, "Alice")));

    let (status, body) = send(
        users,
        actix_test::TestRequest::get().uri("/users?name=Alice&name=Bob"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Alice" }));
}

#[actix_web::test]
async fn update_by_name_returns_renamed_user() {
    let mut users = MockUserAccounts::new();
    users
        .expect_rename_by_name()
        .withf(|current, new_name| current.to_string() == "Dave" && new_name.to_string() == "David")
        .return_once(|_, new_name| Ok(User::new(UserId::new(2), new_name)));

    let (status, body) = send(
        users,
        actix_test::TestRequest::put()
            .uri("/users?name=Dave")
            .set_json(json!({ "name": "David" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 2, "name": "David" }));
}

#[actix_web::test]
async fn update_by_id_requires_new_name() {
    let mut users = MockUserAccounts::new();
    users.expect_rename_by_id().never();

    let (status, body) = send(
        users,
        actix_test::TestRequest::put()
            .uri("/users/5")
            .set_json(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "New name is required in the request body" })
    );
}

#[actix_web::test]
async fn update_by_id_returns_not_found_for_unknown_id() {
    let mut users = MockUserAccounts::new();
    users
        .expect_rename_by_id()
        .with(eq(UserId::new(5)), eq(name("Evelyn")))
        .return_once(|_, _| Err(Error::not_found("User not found")));

    let (status, body) = send(
        users,
        actix_test::TestRequest::put()
            .uri("/users/5")
            .set_json(json!({ "name": "Evelyn" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[actix_web::test]
async fn delete_by_name_names_the_removed_user() {
    let mut users = MockUserAccounts::new();
    users
        .expect_remove_by_name()
        .with(eq(name("Frank")))
        .return_once(|_| Ok(user(6, "Frank")));

    let (status, body) = send(
        users,
        actix_test::TestRequest::delete().uri("/users?name=Frank"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User Frank deleted successfully" }));
}

#[actix_web::test]
async fn delete_by_name_requires_query_parameter() {
    let mut users = MockUserAccounts::new();
    users.expect_remove_by_name().never();

    let (status, body) = send(users, actix_test::TestRequest::delete().uri("/users")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Name query parameter is required" }));
}

#[actix_web::test]
async fn delete_by_id_returns_fixed_message() {
    let mut users = MockUserAccounts::new();
    users
        .expect_remove_by_id()
        .with(eq(UserId::new(7)))
        .return_once(|_| Ok(user(7, "Grace")));

    let (status, body) = send(users, actix_test::TestRequest::delete().uri("/users/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted successfully" }));
}

#[rstest]
#[case(Error::service_unavailable("pool timed out"), StatusCode::SERVICE_UNAVAILABLE, "pool timed out")]
#[case(Error::internal("disk I/O error"), StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")]
#[actix_web::test]
async fn store_failures_surface_as_server_errors(
    #[case] failure: Error,
    #[case] expected_status: StatusCode,
    #[case] expected_message: &str,
) {
    let mut users = MockUserAccounts::new();
    users.expect_find_by_id().return_once(move |_| Err(failure));

    let (status, body) = send(users, actix_test::TestRequest::get().uri("/users/1")).await;
    assert_eq!(status, expected_status);
    assert_eq!(body, json!({ "error": expected_message }));
}
