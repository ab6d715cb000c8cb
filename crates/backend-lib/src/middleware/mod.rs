// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the `MemberArea` backend.

pub mod auth;

pub use auth::{verify_session, AuthContext};
