//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Health check
//!
//! # Auth
//! GET  /admin                       - Login page
//! POST /admin/login                 - Verify credentials, issue session
//! POST /admin/logout                - Clear session
//!
//! # Orders (read from the remote store, status writes back to it)
//! GET  /admin/dashboard             - Order table with status filter
//! GET  /admin/orders/{id}           - Order detail
//! POST /admin/orders/{id}/status    - Update order status
//! ```

pub mod auth;
pub mod dashboard;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the admin panel router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/admin", get(auth::login_page))
        .route("/admin/login", post(auth::login))
        .route("/admin/logout", post(auth::logout))
        // Orders
        .route("/admin/dashboard", get(dashboard::index))
        .route("/admin/orders/{id}", get(dashboard::show))
        .route("/admin/orders/{id}/status", post(dashboard::update_status))
}
