//! Handlers for the users resource.
use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::extract::Pinned;
use super::state::Global;
use crate::server::errors::HTTPError;

/// List all users, shaped for the pinned version.
#[tracing::instrument(skip(data, pinned), fields(version = %pinned.version))]
pub async fn list<T: Global>(data: web::Data<T>, pinned: Pinned) -> HttpResponse {
    let manager = data.manager();
    let users: Vec<Value> = data
        .users()
        .iter()
        .map(|user| Value::Object(manager.apply(&pinned.version, user)))
        .collect();
    tracing::debug!("Rendered {} users", users.len());
    pinned.respond(&manager.settings().header, &users)
}

/// Fetch one user, shaped for the pinned version.
///
/// # Errors
/// Errors with `404 Not Found` if no user has the given id.
#[tracing::instrument(skip(data, pinned), fields(version = %pinned.version))]
pub async fn get<T: Global>(
    data: web::Data<T>,
    path: web::Path<u64>,
    pinned: Pinned,
) -> Result<HttpResponse, HTTPError> {
    let id = path.into_inner();
    let Some(user) = data.users().iter().find(|user| user.id == id) else {
        tracing::debug!("No user with id {id}");
        return Err(HTTPError::NotFound);
    };
    let manager = data.manager();
    let body = Value::Object(manager.apply(&pinned.version, user));
    Ok(pinned.respond(&manager.settings().header, &body))
}
