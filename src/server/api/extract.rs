//! Resolve the API version of a request.
use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest, HttpResponse, HttpResponseBuilder};
use serde::Serialize;

use crate::server::{
    context,
    errors::HTTPError,
    headers::{deprecation_warning, HTTP_DEPRECATION, HTTP_WARNING},
};
use crate::versioning::{RequestMetadata, Version, VersionError, VersionManager};

impl RequestMetadata for HttpRequest {
    fn header(&self, name: &str) -> Option<String> {
        self.headers()
            .get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
    }

    fn query(&self, name: &str) -> Option<String> {
        // First occurrence wins when a parameter repeats.
        web::Query::<Vec<(String, String)>>::from_query(self.query_string())
            .ok()
            .and_then(|query| {
                query
                    .into_inner()
                    .into_iter()
                    .find_map(|(key, value)| (key == name).then_some(value))
            })
    }
}

/// The version a request is pinned to.
///
/// Requests without a version are pinned to the latest one. Deprecated
/// versions are honored. Malformed or unknown versions are rejected with
/// `400 Bad Request`.
#[derive(Debug, Clone)]
pub struct Pinned {
    /// Resolved version.
    pub version: Arc<Version>,
}

impl Pinned {
    /// Whether the request is pinned to a deprecated version.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.version.deprecated
    }

    /// Add the version headers to a response under construction.
    pub fn headers(&self, builder: &mut HttpResponseBuilder, header: &str) {
        if self.version.is_empty() {
            return;
        }
        let label = self.version.to_string();
        if self.is_deprecated() {
            builder.insert_header((HTTP_DEPRECATION, "true"));
            builder.insert_header((HTTP_WARNING, deprecation_warning(&label)));
        }
        builder.insert_header((header.to_owned(), label));
    }

    /// `200 OK` JSON response carrying the version headers.
    pub fn respond<T: Serialize>(&self, header: &str, body: &T) -> HttpResponse {
        let mut builder = HttpResponse::Ok();
        self.headers(&mut builder, header);
        builder.json(body)
    }
}

impl FromRequest for Pinned {
    type Error = HTTPError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_request(req))
    }
}

/// Resolve the version of `req` once, caching it in the request context.
fn resolve_request(req: &HttpRequest) -> Result<Pinned, HTTPError> {
    if let Some(version) = context::current(req) {
        return Ok(Pinned { version });
    }
    let Some(manager) = req.app_data::<web::Data<VersionManager>>() else {
        tracing::error!("No version manager registered with the app");
        return Err(HTTPError::InternalServerError);
    };
    let version = match manager.resolve(req) {
        Ok(version) => version,
        Err(VersionError::NoVersionSupplied) => manager.latest(),
        Err(VersionError::VersionDeprecated(version)) => {
            tracing::warn!(version = %version, "Request pinned to a deprecated version");
            version
        }
        Err(err) => {
            tracing::debug!(error = %err, "Unable to resolve requested version");
            return Err(err.into());
        }
    };
    context::attach(req, Arc::clone(&version));
    Ok(Pinned { version })
}
