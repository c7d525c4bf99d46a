//! A central place to register App routes.
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::{state::Global, users, versions::versions};

/// Central place to register all the App routing.
///
/// Registers the version registry for the [`Pinned`](super::extract::Pinned)
/// extractor, the shared state for the handlers, and every route.
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    app: App<V>,
    state: &T,
) -> App<V> {
    app.app_data(state.manager().clone())
        .app_data(web::Data::new(state.clone()))
        .service(web::scope("/_api").service(web::resource("/versions").to(versions::<T>)))
        .service(
            web::scope("/users")
                .service(web::resource("").to(users::list::<T>))
                .service(web::resource("/{id}").to(users::get::<T>)),
        )
}
