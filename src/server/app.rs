//! Serve the versioned API.
#![allow(
    clippy::exit,
    clippy::unused_async,
    clippy::infinite_loop,
    clippy::module_name_repetitions
)]
use actix_http::body::MessageBody;
use actix_service::ServiceFactory;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};
use tracing_actix_web::TracingLogger;

use std::io;

use super::api::{routes, state::App as AppState};
use super::tracing::PinnedRootSpanBuilder;
use crate::utils::config::Server;

/// Serve the API described by `state` on the configured address.
#[actix_web::main]
pub async fn serve(state: AppState, server: Server) -> io::Result<()> {
    let Server { bind, port } = server;
    let latest = state.manager.latest();
    tracing::info!(
        "Serving {} API versions (latest '{latest}') on http://{bind}:{port}.",
        state.manager.len()
    );
    if state.manager.is_empty() {
        tracing::warn!("No versions registered, every request is served the latest shape");
    }

    HttpServer::new(move || init_app(&state))
        .bind((bind, port))?
        .run()
        .await
}

/// Initialize the application and all possible routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app(
    state: &AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    routes::register_app(App::new(), state).wrap(TracingLogger::<PinnedRootSpanBuilder>::new())
}
