//! Tracing/logging for the HTTP server

use std::time::Instant;

use actix_web::{
    dev::{ServiceRequest, ServiceResponse},
    HttpMessage,
};
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

use super::context;

/// The length of time in milliseconds after which a request is considered slow
const SLOW_REQUEST_MS: u128 = 5 * 1000;

/// `DefaultRootSpanBuilder` plus request timings and the resolved API version
pub struct PinnedRootSpanBuilder;

/// For measuring the duration of a request
struct RequestStart(Instant);

impl RootSpanBuilder for PinnedRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> tracing::Span {
        // Scoped so the mutable borrow of the extensions ends before `root_span!` borrows `request`.
        {
            let mut request_extensions = request.extensions_mut();
            request_extensions.insert(RequestStart(Instant::now()));
        }

        tracing_actix_web::root_span!(
            request,
            api_version = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            duration_ns = tracing::field::Empty,
        )
    }

    fn on_request_end<B: actix_web::body::MessageBody>(
        span: tracing::Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        if let Ok(response) = outcome.as_ref() {
            // Only set when a handler asked for the version.
            if let Some(version) = context::current(response.request()) {
                span.record("api_version", tracing::field::display(&version));
            }
            if let Some(req_start) = response.request().extensions().get::<RequestStart>() {
                let elapsed = req_start.0.elapsed();
                let millis = elapsed.as_millis();
                span.record("duration_ms", millis);
                span.record("duration_ns", elapsed.as_nanos());
                if millis > SLOW_REQUEST_MS {
                    tracing::warn!(duration_ms = millis, "Slow HTTP request");
                } else {
                    tracing::trace!("HTTP Request");
                }
            }
        }
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}
