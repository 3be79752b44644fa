//! Session middleware configuration.
//!
//! Sets up in-memory server-side sessions using tower-sessions with strict
//! security settings (SameSite=Strict, 24hr inactivity expiry). The session
//! cookie only carries a signed session id; operator identity lives
//! server-side.

use cookie::Key;
use secrecy::ExposeSecret;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::AdminConfig;

/// Session cookie name for the admin panel.
pub const SESSION_COOKIE_NAME: &str = "orderdesk_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
///
/// Sessions do not survive a process restart; the single operator simply
/// logs in again.
///
/// # Panics
///
/// Panics if the session secret is shorter than 32 bytes (prevented by
/// config validation).
#[must_use]
pub fn create_session_layer(
    config: &AdminConfig,
) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let store = MemoryStore::default();

    // Signing key derived from the validated session secret
    let key = Key::derive_from(config.session_secret.expose_secret().as_bytes());

    // Secure cookies only when served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_signed(key)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        // SameSite=Strict - the admin panel is never embedded or linked into
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
