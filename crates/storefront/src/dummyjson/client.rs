//! Demo API client implementation.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::instrument;

use ash_store_core::{AuthSession, Category, Product, User, UserProfile};

use super::DummyJsonError;
use super::wire::{LoginRequest, ProductList, UserList};
use crate::config::DummyJsonConfig;

/// How much of a response body to keep in error diagnostics.
const BODY_SNIPPET_LEN: usize = 200;

/// Client for the demo API at dummyjson.com.
///
/// Cheaply cloneable; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct DummyJsonClient {
    inner: Arc<DummyJsonClientInner>,
}

struct DummyJsonClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl DummyJsonClient {
    /// Create a new demo API client.
    #[must_use]
    pub fn new(config: &DummyJsonConfig) -> Self {
        Self {
            inner: Arc::new(DummyJsonClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// Issue a GET request and parse the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DummyJsonError> {
        let response = self.inner.client.get(self.endpoint(path)).send().await?;
        Self::parse_response(response).await
    }

    /// Check the status and parse the body, logging a snippet on failure.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DummyJsonError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %snippet(&text),
                "demo API returned non-success status"
            );
            return Err(DummyJsonError::Status {
                status: status.as_u16(),
                body: snippet(&text),
            });
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %snippet(&text),
                    "failed to parse demo API response"
                );
                Err(DummyJsonError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or parsing fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, DummyJsonError> {
        let list: ProductList = self.get_json("products").await?;
        Ok(list.products)
    }

    /// Fetch the category labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or parsing fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, DummyJsonError> {
        self.get_json("products/categories").await
    }

    /// Fetch the products of one category, with the category total.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or parsing fails.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn products_in_category(
        &self,
        category: &Category,
    ) -> Result<ProductList, DummyJsonError> {
        let encoded = urlencoding::encode(category.as_str());
        self.get_json(&format!("products/category/{encoded}")).await
    }

    // =========================================================================
    // Auth Methods
    // =========================================================================

    /// Exchange demo credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`DummyJsonError::InvalidCredentials`] on a 400/401 rejection
    /// and a transport or parse error otherwise.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthSession, DummyJsonError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("auth/login"))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST
            || status == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(DummyJsonError::InvalidCredentials);
        }

        Self::parse_response(response).await
    }

    /// Fetch the profile belonging to a bearer token ("who am I").
    ///
    /// # Errors
    ///
    /// Returns [`DummyJsonError::Unauthorized`] on any non-success status -
    /// callers treat every rejection as an invalid token and log out.
    #[instrument(skip(self, token))]
    pub async fn current_user(&self, token: &str) -> Result<UserProfile, DummyJsonError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("auth/me"))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DummyJsonError::Unauthorized);
        }

        Self::parse_response(response).await
    }

    // =========================================================================
    // User Methods
    // =========================================================================

    /// Fetch the user directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or parsing fails.
    #[instrument(skip(self))]
    pub async fn users(&self) -> Result<Vec<User>, DummyJsonError> {
        let list: UserList = self.get_json("users").await?;
        Ok(list.users)
    }
}

/// Truncate a response body for logging.
fn snippet(text: &str) -> String {
    text.chars().take(BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> DummyJsonClient {
        DummyJsonClient::new(&DummyJsonConfig::default())
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = client();
        assert_eq!(
            client.endpoint("products/categories"),
            "https://dummyjson.com/products/categories"
        );
    }

    #[test]
    fn test_category_labels_are_percent_encoded() {
        // "home decoration" style labels must survive the path join.
        let encoded = urlencoding::encode("home decoration");
        assert_eq!(encoded, "home%20decoration");
    }

    #[test]
    fn test_snippet_truncates() {
        let long = "x".repeat(500);
        assert_eq!(snippet(&long).len(), BODY_SNIPPET_LEN);
        assert_eq!(snippet("short"), "short");
    }
}
