//! History of the users API.
use crate::versioning::{Change, Version, VersionError, VersionManager};

use super::user::{user_created_at_change, user_name_field_change, USER_TYPE};

/// Register the users API history on `manager`.
///
/// # Errors
/// Errors if the manager's layout cannot parse the `YYYY-MM-DD` labels, or if
/// one of the dates is already registered.
pub fn register_versions(manager: &mut VersionManager) -> Result<(), VersionError> {
    manager.add(
        Version::new("2018-03-09")
            .description("Users expose their full name")
            .change(
                Change::new("Renames `user.name` to `user.full_name`")
                    .action(USER_TYPE, user_name_field_change),
            ),
    )?;
    manager.add(
        Version::new("2018-02-09")
            .description("Users expose their creation time")
            .change(
                Change::new("Adds `user.created_at`").action(USER_TYPE, user_created_at_change),
            ),
    )?;
    manager.add(
        Version::new("2018-01-09")
            .description("Initial release")
            .deprecated(true),
    )?;
    Ok(())
}
