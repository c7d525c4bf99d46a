//! The version registry: ordering, resolution and the undo chain.
use std::fmt::Write as _;
use std::sync::Arc;

use chrono::NaiveDate;
use lazy_static::lazy_static;

use super::errors::VersionError;
use super::request::RequestMetadata;
use super::settings::Settings;
use super::version::{Data, Version, Versionable};

lazy_static! {
    /// Returned by [`VersionManager::latest`] when no version is registered.
    static ref EMPTY_VERSION: Arc<Version> = Arc::new(Version::default());
}

/// Ordered collection of versions, most recent first.
///
/// Versions are added during start-up. Afterwards the manager is only read,
/// so it can be shared between request handlers without locking.
#[derive(Debug, Clone, Default)]
pub struct VersionManager {
    /// Layout, header and query parameter names.
    settings: Settings,
    /// Registered versions, in strictly descending date order.
    versions: Vec<Arc<Version>>,
}

impl VersionManager {
    /// Manager with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager with the given settings.
    #[must_use]
    pub const fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            versions: Vec::new(),
        }
    }

    /// Override the date layout.
    ///
    /// # Errors
    /// Errors with [`VersionError::LayoutLocked`] once versions are registered,
    /// since their labels were parsed with the current layout.
    pub fn layout(mut self, layout: &str) -> Result<Self, VersionError> {
        if !self.versions.is_empty() {
            return Err(VersionError::LayoutLocked(self.versions.len()));
        }
        layout.clone_into(&mut self.settings.layout);
        Ok(self)
    }

    /// Override the header inspected by [`Self::resolve`].
    #[must_use]
    pub fn header(mut self, header: &str) -> Self {
        header.clone_into(&mut self.settings.header);
        self
    }

    /// Override the query parameter inspected by [`Self::resolve`].
    #[must_use]
    pub fn query(mut self, query: &str) -> Self {
        query.clone_into(&mut self.settings.query);
        self
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Register a version.
    ///
    /// # Errors
    /// Errors if the version's label does not parse with the configured layout,
    /// or if a version for the same date is already registered. The manager is
    /// left unchanged on error.
    pub fn add(&mut self, mut version: Version) -> Result<(), VersionError> {
        let date = self
            .parse_date(&version.label)
            .ok_or_else(|| VersionError::InvalidDateFormat {
                date: version.label.clone(),
                layout: self.settings.layout.clone(),
            })?;
        if self.versions.iter().any(|known| known.date == Some(date)) {
            return Err(VersionError::DuplicateVersion(version.label));
        }
        version.date = Some(date);
        version.layout.clone_from(&self.settings.layout);
        self.versions.push(Arc::new(version));
        // Keep the most recent version first.
        self.versions.sort_by(|left, right| right.date.cmp(&left.date));
        Ok(())
    }

    /// The most recent version, or an empty version if none are registered.
    #[must_use]
    pub fn latest(&self) -> Arc<Version> {
        self.versions
            .first()
            .map_or_else(|| Arc::clone(&EMPTY_VERSION), Arc::clone)
    }

    /// Determine the version requested by `request`.
    ///
    /// Both the header and the query parameter are inspected. When both are
    /// present, the most recent date wins.
    ///
    /// # Errors
    /// - [`VersionError::NoVersionSupplied`] if neither is present. Callers
    ///   usually fall back to [`Self::latest`].
    /// - [`VersionError::InvalidVersion`] if a value is malformed or no version
    ///   is registered for the date.
    /// - [`VersionError::VersionDeprecated`] if the version is deprecated. The
    ///   version is carried by the error and may still be honored.
    pub fn resolve<R: RequestMetadata + ?Sized>(
        &self,
        request: &R,
    ) -> Result<Arc<Version>, VersionError> {
        let header = non_empty(request.header(&self.settings.header));
        let query = non_empty(request.query(&self.settings.query));
        if header.is_none() && query.is_none() {
            return Err(VersionError::NoVersionSupplied);
        }

        let header_date = header.map(|label| self.parse_requested(&label)).transpose()?;
        let query_date = query.map(|label| self.parse_requested(&label)).transpose()?;
        let Some(date) = header_date.max(query_date) else {
            return Err(VersionError::NoVersionSupplied);
        };
        self.find(date)
    }

    /// Render `obj` as it looked in `version`.
    ///
    /// Starting from the latest representation, the changes of every version
    /// more recent than `version` are undone, newest first. The empty version
    /// leaves the data untouched.
    #[must_use]
    pub fn apply<V: Versionable + ?Sized>(&self, version: &Version, obj: &V) -> Data {
        let mut data = obj.data();
        let Some(target) = version.date else {
            return data;
        };
        let type_name = obj.type_name();

        for candidate in &self.versions {
            if candidate.date.is_none_or(|date| target >= date) {
                break;
            }
            for change in &candidate.changes {
                if let Some(action) = change.action_for(type_name) {
                    data = action(data);
                }
            }
        }
        data
    }

    /// Labels of all versions, most recent first.
    #[must_use]
    pub fn versions(&self) -> Vec<String> {
        self.versions.iter().map(ToString::to_string).collect()
    }

    /// Iterate over the registered versions, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Version>> {
        self.versions.iter()
    }

    /// Number of registered versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether no version is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Parse `label`, accepting it only if it renders back identically.
    fn parse_date(&self, label: &str) -> Option<NaiveDate> {
        let layout = &self.settings.layout;
        let date = NaiveDate::parse_from_str(label, layout).ok()?;
        let mut rendered = String::new();
        write!(rendered, "{}", date.format(layout)).ok()?;
        (rendered == label).then_some(date)
    }

    /// Parse a label taken from a request.
    fn parse_requested(&self, label: &str) -> Result<NaiveDate, VersionError> {
        self.parse_date(label)
            .ok_or_else(|| VersionError::InvalidVersion(label.to_owned()))
    }

    /// Look up the version registered for exactly `date`.
    fn find(&self, date: NaiveDate) -> Result<Arc<Version>, VersionError> {
        let Some(version) = self.versions.iter().find(|known| known.date == Some(date)) else {
            let label = date.format(&self.settings.layout).to_string();
            return Err(VersionError::InvalidVersion(label));
        };
        if version.deprecated {
            return Err(VersionError::VersionDeprecated(Arc::clone(version)));
        }
        Ok(Arc::clone(version))
    }
}

/// Treat empty values as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|found| !found.is_empty())
}
