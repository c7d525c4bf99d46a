use actix_http::Request;
use actix_service::Service;
use actix_web::{
    dev::ServiceResponse,
    test::{self},
    Error,
};
use serde_json::{json, Value};

use actix_http::body::MessageBody;

use pinned::demo::{register_versions, seed_users};
use pinned::server::{api::state::App as AppState, app::init_app};
use pinned::versioning::VersionManager;

pub const HEADER: &str = "Version";

pub fn initialize_manager() -> VersionManager {
    let mut manager = VersionManager::new();
    register_versions(&mut manager).unwrap();
    manager
}

pub async fn initialize_app_with(
    manager: VersionManager,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let state = AppState::new(manager, seed_users());
    test::init_service(init_app(&state)).await
}

pub async fn initialize_app(
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    initialize_app_with(initialize_manager()).await
}

/// First seed user, as clients of each demo version see it.
pub fn expected_user(version: &str) -> Value {
    match version {
        "2018-01-09" => json!({ "id": 1, "email": "foo@bar.com", "name": "foo" }),
        "2018-02-09" => json!({
            "id": 1,
            "email": "foo@bar.com",
            "name": "foo",
            "created_at": 1_257_894_000,
        }),
        _ => json!({
            "id": 1,
            "email": "foo@bar.com",
            "full_name": "foo",
            "created_at": 1_257_894_000,
        }),
    }
}
