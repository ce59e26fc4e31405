//! Domain models for storefront.

pub mod session;

pub use session::{Identity, keys as session_keys};
