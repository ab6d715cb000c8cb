// ============================
// crates/backend-lib/src/handlers/mod.rs
// ============================
//! HTTP handlers. Thin glue: resolve identity, validate, call the stores,
//! wrap the outcome in the response envelope.

pub mod account;
pub mod auth;

/// Envelope messages, shared across handlers so tests can assert on them.
pub mod msg {
    pub const UNAUTHENTICATED: &str = "Authentication is invalid. Please log in again.";
    pub const MALFORMED_BODY: &str = "The request body is malformed.";
    pub const USER_NOT_FOUND: &str = "User account was not found.";
    pub const LOGIN_OK: &str = "Logged in.";
    pub const LOGIN_FAILED: &str = "Email address or password is incorrect.";
    pub const SIGNUP_OK: &str = "Account created.";
    pub const EMAIL_TAKEN: &str = "This email address is already registered.";
    pub const LOGOUT_OK: &str = "Logged out.";
    pub const AUTHENTICATED: &str = "Authenticated.";
    pub const WRONG_CURRENT_PASSWORD: &str = "The current password is incorrect.";
    pub const PASSWORD_CHANGED: &str = "Password changed successfully.";
    pub const COUNTER_UPDATED: &str = "Counter value updated.";
}
