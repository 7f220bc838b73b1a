//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Coming-soon page
//! POST /prelaunch       - Sign-up form submission (HTML response)
//! POST /api/prelaunch   - Sign-up submission (JSON tagged result)
//! GET  /health          - Health check (registered in main)
//! GET  /health/ready    - Readiness check (registered in main)
//! ```

pub mod coming_soon;
pub mod prelaunch;

use axum::http::Uri;
use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::middleware;
use crate::state::AppState;

/// Create the sign-up form routes, rate limited per IP.
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/prelaunch", post(prelaunch::subscribe))
        .route("/api/prelaunch", post(prelaunch::subscribe_json))
        .route_layer(middleware::form_rate_limiter())
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(coming_soon::page))
        .merge(form_routes())
        .fallback(not_found)
}

/// Fallback handler for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
