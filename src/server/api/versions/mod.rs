//! Handler documenting the API's version history.
use actix_web::{web, HttpResponse};

use super::extract::Pinned;
use super::state::Global;

/// Module that maps the version history to response structs.
pub mod response;

/// Handler for the versions endpoint.
///
/// Lists every registered version, most recent first, and echoes the version
/// the request itself resolved to.
#[tracing::instrument(skip(data, pinned))]
pub async fn versions<T: Global>(data: web::Data<T>, pinned: Pinned) -> HttpResponse {
    let manager = data.manager();
    let timeline = response::Versions::build(manager, &pinned.version);
    tracing::debug!("Found {} versions", timeline.versions.len());
    pinned.respond(&manager.settings().header, &timeline)
}
