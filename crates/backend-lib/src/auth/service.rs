use async_trait::async_trait;

use crate::error::AppError;

/// Seam between the HTTP layer and session management.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Issue a session for a user, superseding any prior one.
    async fn new_session(&self, user_id: &str) -> Result<String, AppError>;
    /// Resolve a token to a user id; `None` for missing or expired tokens.
    async fn resolve_session(&self, token: &str) -> Result<Option<String>, AppError>;
    /// Destroy a session; no-op if absent.
    async fn destroy_session(&self, token: &str) -> Result<(), AppError>;
    /// TTL applied to issued sessions, in seconds. Doubles as cookie max-age.
    fn session_ttl_secs(&self) -> u64;
}
