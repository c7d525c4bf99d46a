//! Centralized state management for the Actix web server
use std::sync::Arc;

use actix_web::web;

use crate::demo::User;
use crate::versioning::VersionManager;

/// Global, read-only state
pub trait Global {
    /// Fully populated version registry
    fn manager(&self) -> &web::Data<VersionManager>;
    /// Users served by the API, in their latest shape
    fn users(&self) -> &[User];
}

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    /// Fully populated version registry
    pub manager: web::Data<VersionManager>,
    /// Users served by the API
    pub users: Arc<[User]>,
}

impl App {
    /// Freeze a populated registry and the served users into shared state.
    #[must_use]
    pub fn new(manager: VersionManager, users: Vec<User>) -> Self {
        Self {
            manager: web::Data::new(manager),
            users: users.into(),
        }
    }
}

impl Global for App {
    fn manager(&self) -> &web::Data<VersionManager> {
        &self.manager
    }

    fn users(&self) -> &[User] {
        &self.users
    }
}
