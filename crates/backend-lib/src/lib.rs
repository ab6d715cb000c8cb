// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the `MemberArea` session demo server.

pub mod auth;
pub mod config;
pub mod cookie;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod storage;
pub mod validation;

use std::sync::Arc;

use crate::auth::{AuthService, DefaultAuth, MemorySessionStore, SessionManager, SessionStore};
use crate::config::Settings;
use crate::storage::UserStore;

/// Application state shared across all handlers
pub struct AppState {
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
    /// User storage backend
    pub users: Arc<dyn UserStore>,
    /// Settings
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create application state over a user store, with sessions held in
    /// memory.
    pub fn new(users: Arc<dyn UserStore>, settings: Settings) -> Self {
        let session_store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        Self::with_session_store(users, session_store, settings)
    }

    /// Create application state with an explicit session store backend.
    pub fn with_session_store(
        users: Arc<dyn UserStore>,
        session_store: Arc<dyn SessionStore>,
        settings: Settings,
    ) -> Self {
        let sessions = SessionManager::new(session_store);
        let auth: Arc<dyn AuthService> =
            Arc::new(DefaultAuth::new(sessions, settings.session_ttl_secs));

        Self {
            auth,
            users,
            settings: Arc::new(settings),
        }
    }
}
