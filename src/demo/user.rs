//! The `User` resource and the actions undoing its changes.
use serde_json::json;

use crate::versioning::{Data, Versionable};

/// Name actions for [`User`] are registered under.
pub const USER_TYPE: &str = "User";

/// A user, in its latest shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Identifier.
    pub id: u64,
    /// Email address.
    pub email: String,
    /// Full name, exposed as `full_name` since `2018-03-09`.
    pub name: String,
    /// Unix timestamp, exposed since `2018-02-09`.
    pub created_at: i64,
}

impl Versionable for User {
    fn type_name(&self) -> &str {
        USER_TYPE
    }

    fn data(&self) -> Data {
        let mut data = Data::new();
        data.insert("id".to_owned(), json!(self.id));
        data.insert("email".to_owned(), json!(self.email));
        data.insert("full_name".to_owned(), json!(self.name));
        data.insert("created_at".to_owned(), json!(self.created_at));
        data
    }
}

/// Undo the rename of `name` to `full_name`.
#[must_use]
pub fn user_name_field_change(mut data: Data) -> Data {
    if let Some(full_name) = data.shift_remove("full_name") {
        data.insert("name".to_owned(), full_name);
    }
    data
}

/// Undo the addition of `created_at`.
#[must_use]
pub fn user_created_at_change(mut data: Data) -> Data {
    data.shift_remove("created_at");
    data
}

/// Users served by the demo API.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            email: "foo@bar.com".to_owned(),
            name: "foo".to_owned(),
            created_at: 1_257_894_000,
        },
        User {
            id: 2,
            email: "baz@bar.com".to_owned(),
            name: "baz".to_owned(),
            created_at: 1_520_553_600,
        },
    ]
}
