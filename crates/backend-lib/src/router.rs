// ============================
// crates/backend-lib/src/router.rs
// ============================
//! API router assembly.
use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{account, auth};
use crate::middleware::verify_session;
use crate::AppState;

/// Build the API router.
///
/// Protected routes sit behind the session middleware; public routes do not
/// touch the session store unless the handler itself needs to (logout).
pub fn create_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/api/auth", get(auth::profile))
        .route("/api/change-password", post(account::change_password))
        .route("/api/counter", post(account::update_counter))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            verify_session,
        ));

    Router::new()
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .merge(protected)
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the separate dev frontend. Credentials are required because the
/// session rides in a cookie.
fn cors_layer(state: &AppState) -> CorsLayer {
    let origin = state
        .settings
        .cors_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3001"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
