//! Demo API (dummyjson.com) client.
//!
//! # Architecture
//!
//! - One thin method per consumed endpoint - the demo API is the source of
//!   truth, there is no local sync
//! - No retry, no backoff, no timeout, no caching: a failed call surfaces
//!   immediately and the caller decides how to degrade
//! - Responses are read as text first and parsed with `serde_json` so parse
//!   failures can be logged with a body snippet
//!
//! # Endpoints
//!
//! ```text
//! GET  /products                  - full product list
//! GET  /products/categories       - category labels
//! GET  /products/category/{name}  - products + total for one category
//! POST /auth/login                - credential exchange for a bearer token
//! GET  /auth/me                   - "who am I" for a bearer token
//! GET  /users                     - user directory
//! ```

mod client;
pub mod wire;

pub use client::DummyJsonClient;

use thiserror::Error;

/// Errors that can occur when calling the demo API.
#[derive(Debug, Error)]
pub enum DummyJsonError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The login endpoint rejected the credentials.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The "who am I" endpoint rejected the bearer token.
    #[error("token rejected by the demo API")]
    Unauthorized,

    /// Any other non-success status.
    #[error("demo API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body for diagnostics.
        body: String,
    },
}
