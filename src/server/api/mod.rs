//! Versioned API endpoints.

pub mod extract;
pub mod routes;
pub mod state;
pub mod users;
pub mod versions;
