//! Errors raised while registering and resolving versions.
use std::sync::Arc;

use derive_more::Display;

use super::version::Version;

/// Errors returned by the [`VersionManager`](super::manager::VersionManager).
#[derive(Debug, Clone, Display)]
pub enum VersionError {
    /// A version label could not be parsed with the configured layout.
    #[display(fmt = "invalid date {:?} for layout {:?}", date, layout)]
    InvalidDateFormat {
        /// The offending label.
        date: String,
        /// Layout the label was parsed with.
        layout: String,
    },
    /// The layout cannot change once versions are registered with it.
    #[display(fmt = "layout cannot change once {} versions are registered", _0)]
    LayoutLocked(usize),
    /// A version for the same date is already registered.
    #[display(fmt = "version {} is already registered", _0)]
    DuplicateVersion(String),
    /// The request carried neither the version header nor the query parameter.
    /// Callers are expected to fall back to the latest version.
    #[display(fmt = "no version supplied")]
    NoVersionSupplied,
    /// The request asked for a version that is malformed or not registered.
    #[display(fmt = "invalid version {:?}", _0)]
    InvalidVersion(String),
    /// The request resolved to a deprecated version, which is still carried.
    #[display(fmt = "version {} is deprecated", _0)]
    VersionDeprecated(Arc<Version>),
}

impl std::error::Error for VersionError {}

impl VersionError {
    /// The resolved version, when the error still carries one.
    #[must_use]
    pub const fn version(&self) -> Option<&Arc<Version>> {
        match self {
            Self::VersionDeprecated(version) => Some(version),
            Self::InvalidDateFormat { .. }
            | Self::LayoutLocked(_)
            | Self::DuplicateVersion(_)
            | Self::NoVersionSupplied
            | Self::InvalidVersion(_) => None,
        }
    }
}
