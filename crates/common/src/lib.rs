// ================
// common/src/lib.rs
// ================
//! Wire-level types shared between the `MemberArea` backend and its clients.
//! Field names follow the frontend's JSON contract, so every struct here
//! serializes with camelCase keys where the contract has them.

use serde::{Deserialize, Serialize};

/// Uniform response envelope used by every endpoint.
///
/// The envelope, not the HTTP status code, carries success or failure: the
/// server always answers 200 and clients branch on `success`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub payload: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn ok(payload: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            message: message.into(),
        }
    }

    /// Successful response with no payload (logout, password change).
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            payload: None,
            message: message.into(),
        }
    }

    /// Failed response; the message is the only information the client gets.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: None,
            message: message.into(),
        }
    }
}

/// User role, serialized as uppercase strings on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// Public view of a user record. Never carries the password.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub counter_value: i32,
}

/// Body of `POST /api/signup`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/change-password`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// Body of `POST /api/counter`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCounterRequest {
    pub counter_value: i32,
}
