//! Date-pinned API versions.
//!
//! A [`VersionManager`] holds the API's history as a list of [`Version`]s.
//! Each version lists the [`Change`]s it introduced, together with the
//! [`Action`]s that undo them per object type. Objects are always produced in
//! their latest shape; [`VersionManager::apply`] walks back through history to
//! the shape a client pinned to an older version expects.

pub mod errors;
pub mod manager;
pub mod request;
pub mod settings;
pub mod version;

pub use errors::VersionError;
pub use manager::VersionManager;
pub use request::{Metadata, RequestMetadata};
pub use settings::Settings;
pub use version::{Action, Change, Data, Version, Versionable};
