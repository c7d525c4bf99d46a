//! HTTP server serving date-pinned API versions.

pub mod api;
pub mod app;
pub mod context;
pub mod errors;
pub mod headers;
pub mod tracing;
