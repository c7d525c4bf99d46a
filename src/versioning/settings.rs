//! Registry-level settings: date layout and where requests carry their version.
use serde_derive::{Deserialize, Serialize};

/// Default date layout, e.g. `2018-03-09`.
pub const DEFAULT_LAYOUT: &str = "%Y-%m-%d";
/// Default name of the header carrying the requested version.
pub const DEFAULT_HEADER: &str = "Version";
/// Default name of the query parameter carrying the requested version.
pub const DEFAULT_QUERY: &str = "v";

/// Settings of a [`VersionManager`](super::manager::VersionManager).
///
/// Every field falls back to its default when omitted from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// `chrono` format string used to parse and render version dates.
    pub layout: String,
    /// Header inspected for the requested version.
    pub header: String,
    /// Query parameter inspected for the requested version.
    pub query: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.to_owned(),
            header: DEFAULT_HEADER.to_owned(),
            query: DEFAULT_QUERY.to_owned(),
        }
    }
}
