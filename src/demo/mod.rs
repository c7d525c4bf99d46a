//! A small users API, versioned three times in early 2018.
//!
//! Serves as the default content of the `pinned` server and CLI.

pub mod user;
pub mod versions;

pub use user::{seed_users, User};
pub use versions::register_versions;
