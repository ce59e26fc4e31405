//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Dashboard (category pie chart)
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (probes the demo API)
//!
//! # Products
//! GET  /products        - Product grid with category filter + pagination
//!
//! # Auth
//! GET  /auth/login      - Login form, or profile card when logged in
//! POST /auth/login      - Login action
//! POST /auth/logout     - Logout action
//!
//! # Users
//! GET  /users           - User directory table
//!
//! Anything else falls through to a 404.
//! ```

pub mod auth;
pub mod dashboard;
pub mod products;
pub mod users;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the full page router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/products", get(products::index))
        .route("/users", get(users::index))
        .nest("/auth", auth_routes())
        .fallback(not_found)
}

/// Fallback handler for unmatched paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    #[tokio::test]
    async fn test_unmatched_path_responds_not_found() {
        let response = not_found(Uri::from_static("/missing")).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
