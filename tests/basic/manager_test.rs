use pinned::demo::{seed_users, User};
use pinned::versioning::{Metadata, Version, VersionError, VersionManager, Versionable};
use serde_json::{json, Value};

use crate::common;

#[test]
fn test_resolve_and_apply_when_oldest_version_expect_original_shape() {
    let manager = common::initialize_manager();
    let request = Metadata::new().with_query("v", "2018-01-09");
    let version = match manager.resolve(&request) {
        Err(VersionError::VersionDeprecated(version)) => version,
        other => panic!("expected a deprecated version, got {other:?}"),
    };
    let user = User {
        id: 7,
        email: "a@b.c".to_owned(),
        name: "Ada".to_owned(),
        created_at: 0,
    };
    let actual = Value::Object(manager.apply(&version, &user));
    let expected = json!({ "id": 7, "email": "a@b.c", "name": "Ada" });
    assert_eq!(expected, actual);
}

#[test]
fn test_apply_when_latest_expect_identity_for_every_user() {
    let manager = common::initialize_manager();
    let latest = manager.latest();
    for user in seed_users() {
        assert_eq!(manager.apply(&latest, &user), user.data());
    }
}

#[test]
fn test_add_when_bad_date_expect_count_unchanged() {
    let mut manager = common::initialize_manager();
    let before = manager.len();
    assert!(manager.add(Version::new("2019-02-30")).is_err());
    assert_eq!(manager.len(), before);
}

#[test]
fn test_manager_shared_between_threads_expect_same_resolution() {
    let manager = std::sync::Arc::new(common::initialize_manager());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&manager);
            std::thread::spawn(move || {
                let request = Metadata::new().with_header("Version", "2018-02-09");
                shared.resolve(&request).unwrap().to_string()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "2018-02-09");
    }
}

#[test]
fn test_versions_when_layout_custom_expect_round_trip() {
    let mut manager = VersionManager::new().layout("%Y%m%d").unwrap();
    for label in ["20180309", "20170101"] {
        manager.add(Version::new(label)).unwrap();
    }
    assert_eq!(manager.versions(), ["20180309", "20170101"]);
}
