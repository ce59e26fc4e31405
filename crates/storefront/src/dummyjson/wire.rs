//! Wire shapes for the demo API's REST envelopes.
//!
//! The domain types themselves live in `ash-store-core`; this module only
//! holds the envelopes they arrive in.

use serde::{Deserialize, Serialize};

use ash_store_core::{Product, User};

/// Envelope for `GET /products` and `GET /products/category/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductList {
    /// The products in this response page.
    pub products: Vec<Product>,
    /// Total number of matching products, independent of response paging.
    #[serde(default)]
    pub total: i64,
}

/// Envelope for `GET /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserList {
    /// The users in this response page.
    pub users: Vec<User>,
}

/// Body for `POST /auth/login`.
///
/// Credentials go out as plain JSON, which is all the demo API accepts;
/// nothing is hashed or refreshed on our side.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}
