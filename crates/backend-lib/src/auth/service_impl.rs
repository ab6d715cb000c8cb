use async_trait::async_trait;

use crate::auth::{AuthService, SessionManager};
use crate::error::AppError;

pub struct DefaultAuth {
    sm: SessionManager,
    ttl_secs: u64,
}

impl DefaultAuth {
    pub fn new(sm: SessionManager, ttl_secs: u64) -> Self {
        Self { sm, ttl_secs }
    }
}

#[async_trait]
impl AuthService for DefaultAuth {
    async fn new_session(&self, user_id: &str) -> Result<String, AppError> {
        self.sm.create_session(user_id, self.ttl_secs).await
    }

    async fn resolve_session(&self, token: &str) -> Result<Option<String>, AppError> {
        self.sm.resolve_session(token).await
    }

    async fn destroy_session(&self, token: &str) -> Result<(), AppError> {
        self.sm.destroy_session(token).await
    }

    fn session_ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}
