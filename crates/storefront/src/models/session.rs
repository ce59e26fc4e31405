//! Session-related types.
//!
//! The original front-end persisted exactly three browser-local keys after a
//! login: the bearer token, the email, and the first name. The cookie
//! session holds the same three keys, nothing more, so logout can remove
//! precisely what login stored.

use serde::{Deserialize, Serialize};

use ash_store_core::AuthSession;

/// Session-stored identity.
///
/// Minimal data kept in the session to identify the logged-in user; the
/// full profile is re-fetched from the demo API when a page needs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// Bearer token for the "who am I" endpoint.
    pub token: String,
    /// Email shown in the nav bar.
    pub email: String,
    /// First name of the logged-in user.
    pub first_name: String,
}

impl From<&AuthSession> for Identity {
    fn from(session: &AuthSession) -> Self {
        Self {
            token: session.token.clone(),
            email: session.email.clone(),
            first_name: session.first_name.clone(),
        }
    }
}

/// Session keys for identity data.
pub mod keys {
    /// Key for the bearer token.
    pub const TOKEN: &str = "token";

    /// Key for the logged-in email (nav bar label).
    pub const EMAIL: &str = "email";

    /// Key for the logged-in first name.
    pub const FIRST_NAME: &str = "first_name";

    /// Every identity key, in storage order. Login writes exactly these;
    /// logout removes exactly these.
    pub const ALL: [&str; 3] = [TOKEN, EMAIL, FIRST_NAME];
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_auth_session() {
        let auth = AuthSession {
            id: 15,
            username: "kminchelle".to_string(),
            email: "kminchelle@qq.com".to_string(),
            first_name: "Jeanne".to_string(),
            last_name: "Halvorson".to_string(),
            gender: "female".to_string(),
            image: "https://robohash.org/Jeanne.png".to_string(),
            token: "tok".to_string(),
        };

        let identity = Identity::from(&auth);
        assert_eq!(identity.token, "tok");
        assert_eq!(identity.email, "kminchelle@qq.com");
        assert_eq!(identity.first_name, "Jeanne");
    }

    #[test]
    fn test_exactly_three_identity_keys() {
        assert_eq!(keys::ALL, ["token", "email", "first_name"]);
    }
}
