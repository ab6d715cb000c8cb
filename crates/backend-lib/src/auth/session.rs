// ============================
// crates/backend-lib/src/auth/session.rs
// ============================
//! Session token handling and management.
use chrono::{Duration, Utc};
use metrics::counter;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::session_store::{Session, SessionStore};
use crate::error::AppError;
use crate::metrics::{SESSION_CREATED, SESSION_DESTROYED};

/// Session manager for handling authentication tokens.
///
/// Orchestrates the store; holds no state of its own beyond the store
/// handle, so it can be cloned freely into handlers.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Create a new session for a user and return its token.
    ///
    /// Any prior sessions for the user are deleted first: one active session
    /// per user. The caller is responsible for placing the token into the
    /// session cookie with `Max-Age` equal to the TTL.
    pub async fn create_session(
        &self,
        user_id: &str,
        ttl_secs: u64,
    ) -> Result<String, AppError> {
        self.store.delete_sessions_for_user(user_id).await?;

        let token = Uuid::new_v4().to_string();
        let session = Session {
            id: token.clone(),
            user_id: user_id.to_string(),
            expires_at: Utc::now() + Duration::seconds(ttl_secs as i64),
        };
        self.store.create_session(session).await?;

        counter!(SESSION_CREATED).increment(1);
        Ok(token)
    }

    /// Resolve a session token to its owning user id.
    ///
    /// Missing and expired tokens are both `None`: a normal negative result,
    /// not an error. Expiry is evaluated here at read time; the record is
    /// left in place for the store's own housekeeping.
    pub async fn resolve_session(&self, token: &str) -> Result<Option<String>, AppError> {
        let Some(session) = self.store.find_session_by_id(token).await? else {
            return Ok(None);
        };
        if session.is_expired(Utc::now()) {
            return Ok(None);
        }
        Ok(Some(session.user_id))
    }

    /// Destroy a session by token. No-op if the session does not exist.
    /// The caller is responsible for clearing the cookie.
    pub async fn destroy_session(&self, token: &str) -> Result<(), AppError> {
        self.store.delete_session_by_id(token).await?;
        counter!(SESSION_DESTROYED).increment(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session_store::MemorySessionStore;

    fn manager() -> (SessionManager, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        (SessionManager::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_create_then_resolve() {
        let (manager, _) = manager();
        let token = manager.create_session("user-a", 3600).await.unwrap();

        let resolved = manager.resolve_session(&token).await.unwrap();
        assert_eq!(resolved.as_deref(), Some("user-a"));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() {
        let (manager, _) = manager();
        assert!(manager.resolve_session("no-such-token").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_second_session_invalidates_first() {
        let (manager, _) = manager();
        let first = manager.create_session("user-a", 3600).await.unwrap();
        let second = manager.create_session("user-a", 3600).await.unwrap();

        assert!(manager.resolve_session(&first).await.unwrap().is_none());
        assert_eq!(
            manager.resolve_session(&second).await.unwrap().as_deref(),
            Some("user-a")
        );
    }

    #[tokio::test]
    async fn test_destroy_is_idempotent() {
        let (manager, _) = manager();
        let token = manager.create_session("user-a", 3600).await.unwrap();

        manager.destroy_session(&token).await.unwrap();
        manager.destroy_session(&token).await.unwrap();
        assert!(manager.resolve_session(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_resolves_to_none_but_stays_stored() {
        let (manager, store) = manager();
        let stale = Session {
            id: "stale-token".to_string(),
            user_id: "user-a".to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        };
        store.create_session(stale).await.unwrap();

        assert!(manager.resolve_session("stale-token").await.unwrap().is_none());
        // the record still physically exists; expiry is a read-time predicate
        assert!(store
            .find_session_by_id("stale-token")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let (manager, _) = manager();
        let a = manager.create_session("user-a", 3600).await.unwrap();
        let b = manager.create_session("user-b", 3600).await.unwrap();
        assert_ne!(a, b);
    }
}
