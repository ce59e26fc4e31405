//! Authentication route handlers.
//!
//! Login delegates wholesale to the demo API: credentials go out as
//! plaintext JSON (a documented property of the demo, not a design to
//! imitate), a bearer token comes back, and exactly three session keys are
//! written. The same page renders the profile card when a stored token
//! still passes the "who am I" check.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use ash_store_core::UserProfile;

use crate::error::Result;
use crate::filters;
use crate::middleware::{clear_identity, set_identity, stored_token};
use crate::models::session_keys;
use crate::state::AppState;

// =============================================================================
// Form and Query Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Profile display data for the logged-in card.
#[derive(Clone)]
pub struct ProfileView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub image: String,
}

impl From<UserProfile> for ProfileView {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            gender: profile.gender,
            image: profile.image,
        }
    }
}

/// Login page template: form when logged out, profile card when logged in.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub profile: Option<ProfileView>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub current_email: Option<String>,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the login page or the profile card.
///
/// A stored token is re-validated against the "who am I" endpoint on every
/// visit; any rejection clears all identity keys and falls back to the
/// logged-out form.
#[instrument(skip_all)]
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> Result<LoginTemplate> {
    let profile = match stored_token(&session).await? {
        Some(token) => match state.gateway().current_user(&token).await {
            Ok(profile) => Some(ProfileView::from(profile)),
            Err(e) => {
                tracing::warn!("Stored token rejected, clearing identity: {e}");
                clear_identity(&session).await?;
                None
            }
        },
        None => None,
    };

    // Read the nav label after any clearing above so it cannot show a
    // just-invalidated identity.
    let current_email = session.get::<String>(session_keys::EMAIL).await?;

    Ok(LoginTemplate {
        profile,
        error: query.error,
        success: query.success,
        current_email,
    })
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    match state.gateway().login(&form.username, &form.password).await {
        Ok(auth) => {
            set_identity(&session, &auth).await?;
            Ok(Redirect::to("/auth/login"))
        }
        Err(crate::dummyjson::DummyJsonError::InvalidCredentials) => Ok(redirect_with_error(
            "Invalid username or password. Please try again.",
        )),
        Err(e) => {
            tracing::error!("Login request failed: {e}");
            Ok(redirect_with_error(
                "An error occurred during login. Please try again.",
            ))
        }
    }
}

/// Handle logout.
///
/// Clears the in-memory identity and the persisted keys synchronously; no
/// server-side session invalidation call exists on the demo API.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_identity(&session).await?;
    Ok(Redirect::to("/auth/login"))
}

/// Redirect back to the login page with a user-facing error message.
fn redirect_with_error(message: &str) -> Redirect {
    let target = format!("/auth/login?error={}", urlencoding::encode(message));
    Redirect::to(&target)
}
