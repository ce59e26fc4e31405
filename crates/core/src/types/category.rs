//! Product category label.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Category`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CategoryError {
    /// The input string is empty.
    #[error("category cannot be empty")]
    Empty,
}

/// A product category label.
///
/// The demo API models categories as bare strings ("smartphones",
/// "home-decoration", ...). Products reference them by string match, not by
/// a foreign key, so this is a thin wrapper that only rules out the empty
/// label (the products page uses the empty query value to mean "all
/// categories").
///
/// ## Examples
///
/// ```
/// use ash_store_core::Category;
///
/// assert!(Category::parse("smartphones").is_ok());
/// assert!(Category::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Parse a `Category` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    pub fn parse(s: &str) -> Result<Self, CategoryError> {
        if s.is_empty() {
            return Err(CategoryError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the category label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Category` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
