//! Ash Store Core - Shared types library.
//!
//! This crate provides the common types used by the storefront binary:
//! products, categories, users, and the derivations over them (category
//! filtering and pagination).
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here operates on data the storefront has already
//! fetched from the demo API.
//!
//! # Modules
//!
//! - [`types`] - Products, categories, users, and login session payloads
//! - [`pagination`] - The 1-based pager used by the product listing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pagination;
pub mod types;

pub use pagination::Pager;
pub use types::*;
