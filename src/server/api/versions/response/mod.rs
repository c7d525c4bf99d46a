use serde_derive::Serialize;

use crate::versioning::{Version as PinnedVersion, VersionManager};

/// Response for the versions endpoint.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Versions {
    /// Most recent version. Empty if no version is registered.
    pub latest: String,
    /// Version the request resolved to.
    pub active_version: String,
    /// All versions in descending order.
    pub versions: Vec<Version>,
}

/// Response for a single version.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Date label of the version.
    pub date: String,
    /// Description of the version.
    pub description: Option<String>,
    /// Whether the version is deprecated.
    pub deprecated: bool,
    /// Descriptions of the changes introduced by the version.
    pub changes: Vec<String>,
}

impl Versions {
    /// Build the versions response from a populated registry.
    #[must_use]
    pub fn build(manager: &VersionManager, active: &PinnedVersion) -> Self {
        Self {
            latest: manager.latest().to_string(),
            active_version: active.to_string(),
            versions: manager.iter().map(|version| Version::from(&**version)).collect(),
        }
    }
}

impl From<&PinnedVersion> for Version {
    fn from(version: &PinnedVersion) -> Self {
        Self {
            date: version.to_string(),
            description: version.description.clone(),
            deprecated: version.deprecated,
            changes: version
                .changes
                .iter()
                .map(|change| change.description.clone())
                .collect(),
        }
    }
}
