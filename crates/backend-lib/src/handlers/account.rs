// ============================
// crates/backend-lib/src/handlers/account.rs
// ============================
//! Authenticated account mutations: password change and the member counter.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use memberarea_common::{ApiResponse, ChangePasswordRequest, UpdateCounterRequest, UserProfile};
use metrics::counter;
use std::sync::Arc;

use super::msg;
use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::metrics::COUNTER_UPDATED;
use crate::middleware::AuthContext;
use crate::storage::UserPatch;
use crate::validation;
use crate::AppState;

/// `POST /api/change-password`
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    body: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let Some(user_id) = auth.user_id() else {
        return Ok(Json(ApiResponse::fail(msg::UNAUTHENTICATED)));
    };

    let Ok(Json(req)) = body else {
        return Ok(Json(ApiResponse::fail(msg::MALFORMED_BODY)));
    };

    if let Err(err) = validation::validate_change_password(&req) {
        return Ok(Json(ApiResponse::fail(err.to_string())));
    }

    let Some(user) = state.users.find_user_by_id(user_id).await? else {
        return Ok(Json(ApiResponse::fail(msg::USER_NOT_FOUND)));
    };

    if !verify_password(&user.password, &req.current_password) {
        return Ok(Json(ApiResponse::fail(msg::WRONG_CURRENT_PASSWORD)));
    }

    state
        .users
        .update_user(&user.id, UserPatch::password(req.new_password))
        .await?;

    tracing::info!(user_id = %user.id, "password changed");
    Ok(Json(ApiResponse::ok_empty(msg::PASSWORD_CHANGED)))
}

/// `POST /api/counter` — store the posted counter value on the member record
/// and echo the updated profile back.
pub async fn update_counter(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    body: Result<Json<UpdateCounterRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let Some(user_id) = auth.user_id() else {
        return Ok(Json(ApiResponse::fail(msg::UNAUTHENTICATED)));
    };

    let Ok(Json(req)) = body else {
        return Ok(Json(ApiResponse::fail(msg::MALFORMED_BODY)));
    };

    let updated = state
        .users
        .update_user(user_id, UserPatch::counter_value(req.counter_value))
        .await?;

    counter!(COUNTER_UPDATED).increment(1);
    Ok(Json(ApiResponse::ok(
        updated.into_profile(),
        msg::COUNTER_UPDATED,
    )))
}
