//! Carry the resolved version through a request.
//!
//! Once resolved, the version is stored in the request extensions so that
//! later extractors, handlers and the tracing middleware see the same value.
use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};

use crate::versioning::Version;

/// Wrapper keeping the extension type private to this module.
#[derive(Clone)]
struct ResolvedVersion(Arc<Version>);

/// Store `version` as the version of `req`, replacing any earlier one.
pub fn attach(req: &HttpRequest, version: Arc<Version>) {
    req.extensions_mut().insert(ResolvedVersion(version));
}

/// The version stored for `req`, if it has been resolved.
#[must_use]
pub fn current(req: &HttpRequest) -> Option<Arc<Version>> {
    req.extensions()
        .get::<ResolvedVersion>()
        .map(|resolved| Arc::clone(&resolved.0))
}
