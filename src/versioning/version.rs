//! Versions, the changes they introduce and the actions that undo them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

/// Generic keyed representation of a versionable object.
///
/// Actions reshape this map rather than a concrete type, so a single chain of
/// actions can handle any object shape.
pub type Data = serde_json::Map<String, serde_json::Value>;

/// Undo one change for one object type.
///
/// Must be deterministic and must not depend on anything but its input.
pub type Action = Arc<dyn Fn(Data) -> Data + Send + Sync>;

/// An object that is subject to versioning.
pub trait Versionable {
    /// Stable name used to look up actions, e.g. `User`.
    fn type_name(&self) -> &str;
    /// The object as it stands in the latest version.
    fn data(&self) -> Data;
}

/// A backwards-incompatible change and the actions that make it compatible again.
#[derive(Clone, Default)]
pub struct Change {
    /// Description of the change made. Used for documentation.
    pub description: String,
    /// Map of object type name to the action undoing this change for that type.
    pub actions: HashMap<String, Action>,
}

impl Change {
    /// Create a change with no actions.
    #[must_use]
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_owned(),
            actions: HashMap::new(),
        }
    }

    /// Register the action undoing this change for objects of `type_name`.
    ///
    /// A later registration for the same type replaces the earlier one.
    #[must_use]
    pub fn action<F>(mut self, type_name: &str, action: F) -> Self
    where
        F: Fn(Data) -> Data + Send + Sync + 'static,
    {
        self.actions.insert(type_name.to_owned(), Arc::new(action));
        self
    }

    /// Action registered for `type_name`, if any.
    #[must_use]
    pub fn action_for(&self, type_name: &str) -> Option<&Action> {
        self.actions.get(type_name)
    }
}

impl fmt::Debug for Change {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut types: Vec<&String> = self.actions.keys().collect();
        types.sort();
        formatter
            .debug_struct("Change")
            .field("description", &self.description)
            .field("actions", &types)
            .finish()
    }
}

/// A point in the API's history, pinned to a calendar date.
///
/// Holds the changes made in this version. When a client is pinned to an
/// older version, the changes are undone in the order they are listed.
#[derive(Debug, Clone, Default)]
pub struct Version {
    /// Raw date label as supplied by the caller, e.g. `2018-03-09`.
    pub label: String,
    /// Optional human readable description.
    pub description: Option<String>,
    /// Whether clients pinned to this version should be warned.
    pub deprecated: bool,
    /// Changes introduced by this version.
    pub changes: Vec<Change>,
    /// Parsed date. Only set once the version is registered.
    pub(crate) date: Option<NaiveDate>,
    /// Layout the date was parsed with.
    pub(crate) layout: String,
}

impl Version {
    /// Create an unregistered version for the `label` date.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            ..Self::default()
        }
    }

    /// Document the version.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Flag the version as deprecated.
    #[must_use]
    pub const fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Append a change. Changes are undone in the order they are added.
    #[must_use]
    pub fn change(mut self, change: Change) -> Self {
        self.changes.push(change);
        self
    }

    /// Parsed date, `None` until the version has been registered.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Whether this is the empty version returned when nothing is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.date.is_none()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.date {
            Some(date) => write!(formatter, "{}", date.format(&self.layout)),
            None => Ok(()),
        }
    }
}
