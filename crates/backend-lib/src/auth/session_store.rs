// ============================
// crates/backend-lib/src/auth/session_store.rs
// ============================
//! Session persistence abstraction with an in-memory implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::error::AppError;

/// Server-side session record binding an opaque bearer token to a user.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque random token; unique, used as the bearer credential.
    pub id: String,
    /// Owning user. Exactly one user per session.
    pub user_id: String,
    /// Absolute timestamp after which the session is invalid.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Trait for session storage backends
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a new session record. Fails with `Conflict` if the id exists.
    async fn create_session(&self, session: Session) -> Result<(), AppError>;

    /// Look up a session by id.
    async fn find_session_by_id(&self, id: &str) -> Result<Option<Session>, AppError>;

    /// Delete a session by id; succeeds even if none exists.
    async fn delete_session_by_id(&self, id: &str) -> Result<(), AppError>;

    /// Delete all sessions owned by a user; succeeds even if none exist.
    async fn delete_sessions_for_user(&self, user_id: &str) -> Result<(), AppError>;
}

/// In-memory implementation of the `SessionStore` trait.
///
/// `by_user` keeps the single-active-session invariant at the store level:
/// inserting a session for a user removes that user's previous session, so
/// two racing creates can never leave duplicates behind.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, Session>,
    by_user: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create_session(&self, session: Session) -> Result<(), AppError> {
        if self.sessions.contains_key(&session.id) {
            return Err(AppError::Conflict(format!(
                "session id already exists: {}",
                session.id
            )));
        }

        if let Some((_, prior_id)) = self.by_user.remove(&session.user_id) {
            self.sessions.remove(&prior_id);
        }

        self.by_user
            .insert(session.user_id.clone(), session.id.clone());
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn find_session_by_id(&self, id: &str) -> Result<Option<Session>, AppError> {
        Ok(self.sessions.get(id).map(|entry| entry.value().clone()))
    }

    async fn delete_session_by_id(&self, id: &str) -> Result<(), AppError> {
        if let Some((_, session)) = self.sessions.remove(id) {
            // only drop the index entry if it still points at this session
            self.by_user
                .remove_if(&session.user_id, |_, current| current == id);
        }
        Ok(())
    }

    async fn delete_sessions_for_user(&self, user_id: &str) -> Result<(), AppError> {
        if let Some((_, session_id)) = self.by_user.remove(user_id) {
            self.sessions.remove(&session_id);
        }
        Ok(())
    }
}
