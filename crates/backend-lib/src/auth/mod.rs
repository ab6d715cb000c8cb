// ============================
// crates/backend-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod password;
pub mod session;
pub mod session_store;
mod service;
mod service_impl;

pub use password::{
    score_password, strength_level, verify_password, PasswordCriteria,
    PasswordStrengthResult, StrengthLevel,
};
pub use service::AuthService;
pub use service_impl::DefaultAuth;
pub use session::SessionManager;
pub use session_store::{MemorySessionStore, Session, SessionStore};
