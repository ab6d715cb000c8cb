// ============================
// crates/backend-lib/src/middleware/auth.rs
// ============================
//! Session verification middleware.
//!
//! The sole authorization checkpoint: every protected handler receives its
//! identity from here instead of reading cookies itself. Resolution failure
//! is not an error condition; handlers branch on the anonymous context and
//! answer with the failure envelope.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::{cookie, AppState};

/// Identity resolved for the current request: a user id, or none.
#[derive(Debug, Clone, Default)]
pub struct AuthContext(Option<String>);

impl AuthContext {
    pub fn authenticated(user_id: String) -> Self {
        Self(Some(user_id))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Resolve the session cookie and inject an `AuthContext` extension.
///
/// No cookie means no store lookup at all; an unknown or expired token
/// resolves to the anonymous context. Only unexpected store faults short-
/// circuit, through the usual error boundary.
pub async fn verify_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = match cookie::extract_session_id(request.headers()) {
        None => AuthContext::anonymous(),
        Some(token) => match state.auth.resolve_session(&token).await {
            Ok(Some(user_id)) => AuthContext::authenticated(user_id),
            Ok(None) => AuthContext::anonymous(),
            Err(err) => return err.into_response(),
        },
    };

    request.extensions_mut().insert(context);
    next.run(request).await
}
