//! Session middleware configuration.
//!
//! Sets up cookie sessions backed by the in-memory store. The session
//! replaces the browser-local storage of the original front-end: the same
//! three identity keys, no expiry handling, no server-side invalidation.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "ash_session";

/// Create the session layer with the in-memory store.
///
/// The cookie lives for the browser session; the stored identity has no
/// expiry of its own (the demo API token is never refreshed).
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    // Secure cookies only when actually served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
