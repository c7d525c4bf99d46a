//! Headers used in the pinned server.
//!
//! The header carrying the requested version is configurable, see
//! [`Settings::header`](crate::versioning::Settings::header). Responses echo
//! the resolved version back in that same header.

/// Set to `true` on responses rendered for a deprecated version.
///
/// Example:
///
/// `Deprecation: true`
pub const HTTP_DEPRECATION: &str = "Deprecation";

/// Human readable warning attached to responses rendered for a deprecated version.
///
/// Example:
///
/// `Warning: 299 - "API version 2018-01-09 is deprecated"`
pub const HTTP_WARNING: &str = "Warning";

/// Value of the [`HTTP_WARNING`] header for the deprecated version `label`.
#[must_use]
pub fn deprecation_warning(label: &str) -> String {
    format!("299 - \"API version {label} is deprecated\"")
}
