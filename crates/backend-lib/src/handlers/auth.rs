// ============================
// crates/backend-lib/src/handlers/auth.rs
// ============================
//! Signup, login, logout and the member-profile fetch.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Extension, Json,
};
use memberarea_common::{ApiResponse, LoginRequest, SignupRequest, UserProfile};
use metrics::counter;
use std::sync::Arc;

use super::msg;
use crate::auth::password::verify_password;
use crate::cookie;
use crate::error::AppError;
use crate::metrics::{LOGIN_FAILED, LOGIN_SUCCESS, SIGNUP_CREATED};
use crate::middleware::AuthContext;
use crate::storage::UserRecord;
use crate::validation;
use crate::AppState;

/// Issue a session for the user and attach the cookie to the response.
async fn respond_with_session(
    state: &AppState,
    user: UserRecord,
    message: &str,
) -> Result<Response, AppError> {
    let token = state.auth.new_session(&user.id).await?;
    let cookie_value = cookie::session_cookie(&token, state.auth.session_ttl_secs());

    let mut response =
        Json(ApiResponse::ok(user.into_profile(), message)).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie_value)
            .map_err(|e| AppError::Internal(e.to_string()))?,
    );
    Ok(response)
}

/// `POST /api/signup` — create an account and log it straight in.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Ok(Json(req)) = body else {
        return Ok(fail_response(msg::MALFORMED_BODY));
    };

    if let Err(err) = validation::validate_signup(&req) {
        return Ok(fail_response(err.to_string()));
    }

    let user = UserRecord::new(req.name, req.email, req.password);
    let user = match state.users.create_user(user).await {
        Ok(user) => user,
        Err(AppError::Conflict(_)) => return Ok(fail_response(msg::EMAIL_TAKEN)),
        Err(err) => return Err(err),
    };

    counter!(SIGNUP_CREATED).increment(1);
    tracing::info!(user_id = %user.id, "account created");
    respond_with_session(&state, user, msg::SIGNUP_OK).await
}

/// `POST /api/login` — verify credentials and issue a session.
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Ok(Json(req)) = body else {
        return Ok(fail_response(msg::MALFORMED_BODY));
    };

    let Some(user) = state.users.find_user_by_email(&req.email).await? else {
        counter!(LOGIN_FAILED).increment(1);
        return Ok(fail_response(msg::LOGIN_FAILED));
    };

    if !verify_password(&user.password, &req.password) {
        counter!(LOGIN_FAILED).increment(1);
        tracing::warn!(user_id = %user.id, "login rejected: wrong password");
        return Ok(fail_response(msg::LOGIN_FAILED));
    }

    counter!(LOGIN_SUCCESS).increment(1);
    tracing::info!(user_id = %user.id, "login succeeded");
    respond_with_session(&state, user, msg::LOGIN_OK).await
}

/// `POST /api/logout` — destroy the session if one is presented.
/// Always succeeds and always clears the cookie, even with no session.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = cookie::extract_session_id(&headers) {
        state.auth.destroy_session(&token).await?;
    }

    let mut response =
        Json(ApiResponse::<UserProfile>::ok_empty(msg::LOGOUT_OK)).into_response();
    response.headers_mut().insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie::clear_session_cookie())
            .map_err(|e| AppError::Internal(e.to_string()))?,
    );
    Ok(response)
}

/// `GET /api/auth` — profile of the authenticated member.
pub async fn profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let Some(user_id) = auth.user_id() else {
        return Ok(Json(ApiResponse::fail(msg::UNAUTHENTICATED)));
    };

    let Some(user) = state.users.find_user_by_id(user_id).await? else {
        return Ok(Json(ApiResponse::fail(msg::USER_NOT_FOUND)));
    };

    Ok(Json(ApiResponse::ok(user.into_profile(), msg::AUTHENTICATED)))
}

fn fail_response(message: impl Into<String>) -> Response {
    Json(ApiResponse::<UserProfile>::fail(message)).into_response()
}
