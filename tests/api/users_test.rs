use crate::common::{self, expected_user, HEADER};
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

#[actix_web::test]
async fn test_list_users_when_no_version_expect_latest_shape() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let actual = resp.headers().get(HEADER).unwrap().to_str().unwrap().to_owned();
    assert_eq!(actual, "2018-03-09");
    let body: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 2);
    assert_eq!(body[0], expected_user("2018-03-09"));
}

#[actix_web::test]
async fn test_list_users_for_every_version_expect_matching_shape() {
    let app = common::initialize_app().await;
    for version in common::initialize_manager().versions() {
        let req = test::TestRequest::get()
            .uri(&format!("/users?v={version}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "{version}");
        let body: Vec<Value> = test::read_body_json(resp).await;
        assert_eq!(body[0], expected_user(&version), "{version}");
    }
}

#[actix_web::test]
async fn test_get_user_when_version_in_header_expect_pinned_shape() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/users/1")
        .insert_header((HEADER, "2018-02-09"))
        .to_request();
    let actual: Value = test::call_and_read_body_json(&app, req).await;
    let expected = expected_user("2018-02-09");
    assert_eq!(expected, actual);
}

#[actix_web::test]
async fn test_get_user_when_header_and_query_expect_most_recent_wins() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/users/1?v=2018-01-09")
        .insert_header((HEADER, "2018-02-09"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let actual = resp.headers().get(HEADER).unwrap().to_str().unwrap().to_owned();
    assert_eq!(actual, "2018-02-09");
}

#[actix_web::test]
async fn test_get_user_when_deprecated_version_expect_success_with_warning() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/users/1?v=2018-01-09")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get("Deprecation").unwrap(), "true");
    assert!(resp.headers().contains_key("Warning"));
    let actual: Value = test::read_body_json(resp).await;
    assert_eq!(actual, expected_user("2018-01-09"));
}

#[actix_web::test]
async fn test_get_user_when_current_version_expect_no_deprecation_header() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/users/1?v=2018-03-09")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(!resp.headers().contains_key("Deprecation"));
}

#[actix_web::test]
async fn test_get_user_when_unknown_version_expect_client_error() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/users/1?v=2000-01-02")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_get_user_when_malformed_version_expect_client_error() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/users/1")
        .insert_header((HEADER, "March 9th"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_get_user_when_unknown_id_expect_not_found() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get().uri("/users/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_get_user_when_custom_header_configured_expect_custom_header_used() {
    let mut manager = pinned::versioning::VersionManager::new().header("Api-Version");
    pinned::demo::register_versions(&mut manager).unwrap();
    let app = common::initialize_app_with(manager).await;
    let req = test::TestRequest::get()
        .uri("/users/1")
        .insert_header(("Api-Version", "2018-01-09"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().get(HEADER).is_none());
    assert_eq!(resp.headers().get("Api-Version").unwrap(), "2018-01-09");
    let actual: Value = test::read_body_json(resp).await;
    assert_eq!(actual, expected_user("2018-01-09"));
}

#[actix_web::test]
async fn test_list_users_when_no_versions_registered_expect_latest_shape() {
    let app = common::initialize_app_with(pinned::versioning::VersionManager::new()).await;
    let req = test::TestRequest::get().uri("/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert!(resp.headers().get(HEADER).is_none());
    let body: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(body[0], expected_user("latest"));
}

#[actix_web::test]
async fn test_get_user_when_header_and_query_equal_expect_that_version() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/users/1?v=2018-02-09")
        .insert_header((HEADER, "2018-02-09"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(HEADER).unwrap(), "2018-02-09");
    let actual: Value = test::read_body_json(resp).await;
    assert_eq!(actual, expected_user("2018-02-09"));
}

#[actix_web::test]
async fn test_get_user_when_query_repeats_expect_first_value_used() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/users/1?v=2018-02-09&v=2018-03-09")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(HEADER).unwrap(), "2018-02-09");
}
