//! User and login session types.

use serde::{Deserialize, Serialize};

/// A user record from the demo API's user directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID assigned by the demo API.
    pub id: i64,
    /// Given name, the only name the user directory shows.
    pub first_name: String,
    /// Email address (unvalidated, trusted as given).
    pub email: String,
}

/// The profile returned by the "who am I" endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID assigned by the demo API.
    pub id: i64,
    /// Login username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Gender as reported by the demo API.
    pub gender: String,
    /// Avatar image URL.
    pub image: String,
}

/// A successful login response.
///
/// Created by the login endpoint and never refreshed; the token has no
/// expiry handling on our side (demo API limitation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// User ID assigned by the demo API.
    pub id: i64,
    /// Login username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Gender as reported by the demo API.
    pub gender: String,
    /// Avatar image URL.
    pub image: String,
    /// Bearer token for the "who am I" endpoint.
    pub token: String,
}
