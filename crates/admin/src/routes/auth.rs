//! Authentication route handlers.
//!
//! One operator, credentials held in server-side configuration and verified
//! server-side. A successful login issues a signed, expiring session; the
//! credentials themselves never reach anything served to clients.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAdminAuth, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Display the login page.
///
/// GET /admin
///
/// An already-authenticated operator is bounced straight to the dashboard.
pub async fn login_page(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if admin.is_some() {
        return Redirect::to("/admin/dashboard").into_response();
    }

    LoginTemplate {
        error: query.error,
        success: query.success,
    }
    .into_response()
}

/// Handle login form submission.
///
/// POST /admin/login
///
/// Exact-match comparison against the configured operator pair. No rate
/// limiting and no lockout; the mismatch path leaves the form usable.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    if !state.config().operator.verify(&form.email, &form.password) {
        tracing::warn!(email = %form.email, "Login failed: invalid credentials");
        return Redirect::to("/admin?error=credentials").into_response();
    }

    let admin = CurrentAdmin::new(form.email);

    if let Err(e) = set_current_admin(&session, &admin).await {
        tracing::error!("Failed to set session: {}", e);
        return Redirect::to("/admin?error=session").into_response();
    }

    set_sentry_user(&admin.email);
    tracing::info!(email = %admin.email, "Operator logged in");

    Redirect::to("/admin/dashboard").into_response()
}

/// Logout and clear the session.
///
/// POST /admin/logout
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }
    clear_sentry_user();

    Redirect::to("/admin?success=logged_out")
}
