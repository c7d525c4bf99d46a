use crate::common;
use actix_web::test;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_versions_expect_descending_timeline() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get().uri("/_api/versions").to_request();
    let actual: Value = test::call_and_read_body_json(&app, req).await;
    let expected = json!({
        "latest": "2018-03-09",
        "activeVersion": "2018-03-09",
        "versions": [
            {
                "date": "2018-03-09",
                "description": "Users expose their full name",
                "deprecated": false,
                "changes": ["Renames `user.name` to `user.full_name`"],
            },
            {
                "date": "2018-02-09",
                "description": "Users expose their creation time",
                "deprecated": false,
                "changes": ["Adds `user.created_at`"],
            },
            {
                "date": "2018-01-09",
                "description": "Initial release",
                "deprecated": true,
                "changes": [],
            },
        ],
    });
    assert_eq!(expected, actual);
}

#[actix_web::test]
async fn test_versions_when_pinned_expect_active_version_echoed() {
    let app = common::initialize_app().await;
    let req = test::TestRequest::get()
        .uri("/_api/versions?v=2018-02-09")
        .to_request();
    let actual: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(actual["activeVersion"], "2018-02-09");
    assert_eq!(actual["latest"], "2018-03-09");
}
