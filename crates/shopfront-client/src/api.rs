//! # Remote API Adapter
//!
//! The injected transport seam. [`RemoteApi`] describes the shop server's
//! JSON-over-HTTP contract; [`HttpApi`] is the default reqwest-backed
//! implementation. The store core only ever sees the trait, so tests and
//! automation substitute scripted implementations.
//!
//! ## Endpoints
//! ```text
//! ┌───────────────────┬──────────────────────────────┬──────┬──────────────┐
//! │ Operation         │ Method & Path                │ Auth │ Response     │
//! ├───────────────────┼──────────────────────────────┼──────┼──────────────┤
//! │ fetch_cart        │ GET    /api/cart             │ yes  │ [CartItem]   │
//! │ add_item          │ POST   /api/cart/add         │ yes  │ CartItem     │
//! │ remove_item       │ DELETE /api/cart/{productId} │ yes  │ (no body)    │
//! │ increase_quantity │ POST   /api/cart/increase    │ yes  │ CartItem     │
//! │ decrease_quantity │ POST   /api/cart/decrease    │ yes  │ CartItem     │
//! │ clear_cart        │ DELETE /api/cart             │ yes  │ (no body)    │
//! │ login             │ POST   /api/users/login      │ no   │ {token}      │
//! │ register          │ POST   /api/users/register   │ no   │ {token?}     │
//! │ current_user      │ GET    /api/users/me         │ yes  │ User         │
//! │ fetch_products    │ GET    /api/products         │ no   │ [Product]    │
//! └───────────────────┴──────────────────────────────┴──────┴──────────────┘
//! ```
//!
//! Authenticated calls send `Authorization: Bearer <token>`. Mutation
//! responses are **authoritative**: the returned line fully replaces the
//! client's guess about that product's quantity.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use shopfront_core::{CartItem, Product, User};

use crate::error::{ClientError, ClientResult};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Trait
// =============================================================================

/// The shop server's remote contract.
///
/// No retry policy lives here or behind it in the engine; if the server or
/// a caller wants retries, they happen outside this seam.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn fetch_cart(&self, token: &str) -> ClientResult<Vec<CartItem>>;

    /// Sends a delta quantity; returns the resulting authoritative line.
    async fn add_item(&self, token: &str, product_id: u64, quantity: i64)
        -> ClientResult<CartItem>;

    async fn remove_item(&self, token: &str, product_id: u64) -> ClientResult<()>;

    /// Sends a delta quantity; returns the resulting authoritative line.
    async fn increase_quantity(
        &self,
        token: &str,
        product_id: u64,
        quantity: i64,
    ) -> ClientResult<CartItem>;

    /// Sends a delta quantity; returns the resulting authoritative line,
    /// whose quantity may be ≤ 0.
    async fn decrease_quantity(
        &self,
        token: &str,
        product_id: u64,
        quantity: i64,
    ) -> ClientResult<CartItem>;

    async fn clear_cart(&self, token: &str) -> ClientResult<()>;

    /// Exchanges credentials for a session token.
    async fn login(&self, email: &str, password: &str) -> ClientResult<String>;

    /// Creates an account. Servers may or may not establish a session
    /// immediately; `None` means a separate login is required.
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<Option<String>>;

    async fn current_user(&self, token: &str) -> ClientResult<User>;

    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuantityBody {
    product_id: u64,
    quantity: i64,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Deserialize)]
struct RegisterResponse {
    token: Option<String>,
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Default [`RemoteApi`] implementation over reqwest.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Builds the client with request and connect timeouts. These timeouts
    /// are the only time bound the engine has: no cancellation exists above
    /// this layer.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(HttpApi { http, base_url: base_url.into().trim_end_matches('/').to_string() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a response's status before the body is consumed: 401/403 become
    /// `Unauthorized`, other non-success statuses become `Api` with the
    /// server's body as message.
    async fn check(resp: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(ClientError::Api { status: status.as_u16(), message })
    }

    async fn mutate_line(
        &self,
        token: &str,
        path: &str,
        product_id: u64,
        quantity: i64,
    ) -> ClientResult<CartItem> {
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(&QuantityBody { product_id, quantity })
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn fetch_cart(&self, token: &str) -> ClientResult<Vec<CartItem>> {
        let resp = self.http.get(self.url("/api/cart")).bearer_auth(token).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn add_item(
        &self,
        token: &str,
        product_id: u64,
        quantity: i64,
    ) -> ClientResult<CartItem> {
        self.mutate_line(token, "/api/cart/add", product_id, quantity).await
    }

    async fn remove_item(&self, token: &str, product_id: u64) -> ClientResult<()> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/cart/{product_id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn increase_quantity(
        &self,
        token: &str,
        product_id: u64,
        quantity: i64,
    ) -> ClientResult<CartItem> {
        self.mutate_line(token, "/api/cart/increase", product_id, quantity).await
    }

    async fn decrease_quantity(
        &self,
        token: &str,
        product_id: u64,
        quantity: i64,
    ) -> ClientResult<CartItem> {
        self.mutate_line(token, "/api/cart/decrease", product_id, quantity).await
    }

    async fn clear_cart(&self, token: &str) -> ClientResult<()> {
        let resp = self.http.delete(self.url("/api/cart")).bearer_auth(token).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        let resp = self
            .http
            .post(self.url("/api/users/login"))
            .json(&LoginBody { email, password })
            .send()
            .await?;
        let body: TokenResponse = Self::check(resp).await?.json().await?;
        Ok(body.token)
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<Option<String>> {
        let resp = self
            .http
            .post(self.url("/api/users/register"))
            .json(&RegisterBody { name, email, password })
            .send()
            .await?;
        let body: RegisterResponse = Self::check(resp).await?.json().await?;
        Ok(body.token)
    }

    async fn current_user(&self, token: &str) -> ClientResult<User> {
        let resp = self.http.get(self.url("/api/users/me")).bearer_auth(token).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        let resp = self.http.get(self.url("/api/products")).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let api = HttpApi::new("http://localhost:5000/").unwrap();
        assert_eq!(api.url("/api/cart"), "http://localhost:5000/api/cart");

        let api = HttpApi::new("http://localhost:5000").unwrap();
        assert_eq!(api.url("/api/cart/7"), "http://localhost:5000/api/cart/7");
    }

    #[test]
    fn test_quantity_body_wire_format() {
        let body = QuantityBody { product_id: 3, quantity: 2 };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "productId": 3, "quantity": 2 }));
    }
}
