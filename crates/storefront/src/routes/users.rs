//! User directory route handler.
//!
//! Unlike the dashboard and product grid, this page does not degrade to an
//! empty view: it was rendered server-side in the original, so a fetch
//! failure surfaces as a server error.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use ash_store_core::User;

use crate::error::Result;
use crate::filters;
use crate::middleware::CurrentEmail;
use crate::state::AppState;

/// User row display data for the directory table.
#[derive(Clone)]
pub struct UserRowView {
    pub first_name: String,
    pub email: String,
}

impl From<&User> for UserRowView {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            email: user.email.clone(),
        }
    }
}

/// User directory page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersTemplate {
    pub users: Vec<UserRowView>,
    pub current_email: Option<String>,
}

/// Display the user directory.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    CurrentEmail(current_email): CurrentEmail,
) -> Result<UsersTemplate> {
    let users = state.gateway().users().await?;
    let users = users.iter().map(UserRowView::from).collect();

    Ok(UsersTemplate {
        users,
        current_email,
    })
}
