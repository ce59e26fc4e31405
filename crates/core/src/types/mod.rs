//! Core types for Ash Store.
//!
//! These mirror the JSON shapes served by the demo API. The API is the only
//! source of truth; nothing here is written back, so the types are plain
//! value records with no referential integrity beyond "product has a
//! category label".

pub mod category;
pub mod product;
pub mod user;

pub use category::{Category, CategoryError};
pub use product::{Product, in_category};
pub use user::{AuthSession, User, UserProfile};
