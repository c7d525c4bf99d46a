//! Request metadata a version is resolved from.
use std::collections::HashMap;

/// Header and query parameter lookups of an incoming request.
///
/// Empty values are treated the same as missing ones.
pub trait RequestMetadata {
    /// Value of the header `name`. Header names are case-insensitive.
    fn header(&self, name: &str) -> Option<String>;
    /// Value of the query parameter `name`.
    fn query(&self, name: &str) -> Option<String>;
}

/// In-memory request metadata, for callers that are not behind an HTTP server.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Headers, keyed by lowercase name.
    headers: HashMap<String, String>,
    /// Query parameters.
    query: HashMap<String, String>,
}

impl Metadata {
    /// Empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_owned());
        self
    }

    /// Set a query parameter.
    #[must_use]
    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl RequestMetadata for Metadata {
    fn header(&self, name: &str) -> Option<String> {
        self.headers.get(&name.to_ascii_lowercase()).cloned()
    }

    fn query(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }
}
