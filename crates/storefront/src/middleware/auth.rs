//! Authentication helpers and extractors.
//!
//! The session holds exactly the three identity keys written at login (see
//! [`crate::models::session::keys`]). These helpers are the only writers.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use ash_store_core::AuthSession;

use crate::models::{Identity, session_keys as keys};

/// Store the identity of a freshly logged-in user.
///
/// Writes exactly the token, email, and first-name keys.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn set_identity(
    session: &Session,
    auth: &AuthSession,
) -> Result<(), tower_sessions::session::Error> {
    let identity = Identity::from(auth);
    session.insert(keys::TOKEN, &identity.token).await?;
    session.insert(keys::EMAIL, &identity.email).await?;
    session.insert(keys::FIRST_NAME, &identity.first_name).await?;
    Ok(())
}

/// Clear the logged-in identity.
///
/// Removes exactly the keys that [`set_identity`] wrote. No server-side
/// session invalidation call is made (the demo API has none).
///
/// # Errors
///
/// Returns an error if the session store rejects the removal.
pub async fn clear_identity(session: &Session) -> Result<(), tower_sessions::session::Error> {
    for key in keys::ALL {
        session.remove::<serde_json::Value>(key).await?;
    }
    Ok(())
}

/// Read the persisted bearer token, if any.
///
/// # Errors
///
/// Returns an error if the session store fails to load.
pub async fn stored_token(
    session: &Session,
) -> Result<Option<String>, tower_sessions::session::Error> {
    session.get::<String>(keys::TOKEN).await
}

/// Extractor for the email shown in the nav bar.
///
/// Reads the session on every request - the per-request replacement for the
/// original's 1-second localStorage polling loop. Never rejects; a missing
/// or unreadable session simply means logged out.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentEmail(email): CurrentEmail) -> impl IntoResponse {
///     // `email` is Some("user@example.com") when logged in
/// }
/// ```
pub struct CurrentEmail(pub Option<String>);

impl<S> FromRequestParts<S> for CurrentEmail
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let Some(session) = parts.extensions.get::<Session>() else {
            return Ok(Self(None));
        };

        let email = session.get::<String>(keys::EMAIL).await.ok().flatten();
        Ok(Self(email))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn auth_session() -> AuthSession {
        AuthSession {
            id: 15,
            username: "kminchelle".to_string(),
            email: "kminchelle@qq.com".to_string(),
            first_name: "Jeanne".to_string(),
            last_name: "Halvorson".to_string(),
            gender: "female".to_string(),
            image: "https://robohash.org/Jeanne.png".to_string(),
            token: "tok".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_exactly_the_identity_keys() {
        let session = session();
        set_identity(&session, &auth_session()).await.unwrap();

        assert_eq!(
            session.get::<String>(keys::TOKEN).await.unwrap().as_deref(),
            Some("tok")
        );
        assert_eq!(
            session.get::<String>(keys::EMAIL).await.unwrap().as_deref(),
            Some("kminchelle@qq.com")
        );
        assert_eq!(
            session
                .get::<String>(keys::FIRST_NAME)
                .await
                .unwrap()
                .as_deref(),
            Some("Jeanne")
        );

        // The rest of the login response is never persisted.
        for key in ["id", "username", "last_name", "gender", "image"] {
            assert!(
                session.get::<serde_json::Value>(key).await.unwrap().is_none(),
                "unexpected session key {key}"
            );
        }
    }

    #[tokio::test]
    async fn test_logout_removes_every_identity_key() {
        let session = session();
        set_identity(&session, &auth_session()).await.unwrap();
        clear_identity(&session).await.unwrap();

        for key in keys::ALL {
            assert!(
                session.get::<serde_json::Value>(key).await.unwrap().is_none(),
                "key {key} survived logout"
            );
        }
    }

    #[tokio::test]
    async fn test_stored_token_round_trip() {
        let session = session();
        assert!(stored_token(&session).await.unwrap().is_none());

        set_identity(&session, &auth_session()).await.unwrap();
        assert_eq!(stored_token(&session).await.unwrap().as_deref(), Some("tok"));

        // A rejected token and a logout take the same path: clear everything.
        clear_identity(&session).await.unwrap();
        assert!(stored_token(&session).await.unwrap().is_none());
    }
}
