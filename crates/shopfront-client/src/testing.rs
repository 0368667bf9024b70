//! Test doubles and fixtures shared by the manager tests.
//!
//! `MockApi` is a scripted [`RemoteApi`]: tests queue responses per
//! endpoint group and the double pops them in order, counting every call so
//! tests can assert that guarded operations produced zero network traffic.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use shopfront_core::{CartItem, Product, ProductCategory, ProductSnapshot, User};

use crate::api::RemoteApi;
use crate::error::ClientResult;
use crate::store::{LogoutCartPolicy, Store, StoreConfig};
use crate::token_store::MemoryTokenStore;

// =============================================================================
// Fixtures
// =============================================================================

pub(crate) fn sample_line(id: u64, product_id: u64, quantity: i64) -> CartItem {
    CartItem {
        id,
        product_id,
        quantity,
        product: ProductSnapshot {
            id: product_id,
            name: format!("Product {product_id}"),
            price: 19.99,
            image: format!("https://img.example/{product_id}.png"),
        },
    }
}

pub(crate) fn sample_product(id: u64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: None,
        created_at: Utc::now(),
        price: 19.99,
        image: format!("https://img.example/{id}.png"),
        category: ProductCategory::Audio,
        rating: 4.2,
        tags: None,
    }
}

pub(crate) fn sample_user() -> User {
    User { id: 7, email: "ada@example.com".to_string(), name: Some("Ada".to_string()) }
}

/// Mints a signed token whose `exp` claim is the given Unix timestamp.
pub(crate) fn expiring_token(exp: i64) -> String {
    #[derive(Serialize)]
    struct Claims {
        sub: String,
        exp: i64,
    }
    let claims = Claims { sub: "user-7".to_string(), exp };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).unwrap()
}

// =============================================================================
// Scripted RemoteApi
// =============================================================================

#[derive(Default)]
pub(crate) struct MockApi {
    calls: AtomicUsize,
    fetch_cart: Mutex<VecDeque<ClientResult<Vec<CartItem>>>>,
    /// Shared by add/increase/decrease: all three return a line.
    lines: Mutex<VecDeque<ClientResult<CartItem>>>,
    /// Shared by remove/clear; an empty queue defaults to `Ok(())`.
    units: Mutex<VecDeque<ClientResult<()>>>,
    logins: Mutex<VecDeque<ClientResult<String>>>,
    registers: Mutex<VecDeque<ClientResult<Option<String>>>>,
    users: Mutex<VecDeque<ClientResult<User>>>,
    products: Mutex<VecDeque<ClientResult<Vec<Product>>>>,
}

impl MockApi {
    /// Total remote calls issued, across every endpoint.
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn script_fetch_cart(&self, result: ClientResult<Vec<CartItem>>) {
        self.fetch_cart.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_line(&self, result: ClientResult<CartItem>) {
        self.lines.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_unit(&self, result: ClientResult<()>) {
        self.units.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_login(&self, result: ClientResult<String>) {
        self.logins.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_register(&self, result: ClientResult<Option<String>>) {
        self.registers.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_user(&self, result: ClientResult<User>) {
        self.users.lock().unwrap().push_back(result);
    }

    pub(crate) fn script_products(&self, result: ClientResult<Vec<Product>>) {
        self.products.lock().unwrap().push_back(result);
    }

    fn take<T>(queue: &Mutex<VecDeque<ClientResult<T>>>, op: &str) -> ClientResult<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for {op}"))
    }
}

#[async_trait]
impl RemoteApi for MockApi {
    async fn fetch_cart(&self, _token: &str) -> ClientResult<Vec<CartItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.fetch_cart, "fetch_cart")
    }

    async fn add_item(
        &self,
        _token: &str,
        _product_id: u64,
        _quantity: i64,
    ) -> ClientResult<CartItem> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.lines, "add_item")
    }

    async fn remove_item(&self, _token: &str, _product_id: u64) -> ClientResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.units.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn increase_quantity(
        &self,
        _token: &str,
        _product_id: u64,
        _quantity: i64,
    ) -> ClientResult<CartItem> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.lines, "increase_quantity")
    }

    async fn decrease_quantity(
        &self,
        _token: &str,
        _product_id: u64,
        _quantity: i64,
    ) -> ClientResult<CartItem> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.lines, "decrease_quantity")
    }

    async fn clear_cart(&self, _token: &str) -> ClientResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.units.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn login(&self, _email: &str, _password: &str) -> ClientResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.logins, "login")
    }

    async fn register(
        &self,
        _name: &str,
        _email: &str,
        _password: &str,
    ) -> ClientResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.registers, "register")
    }

    async fn current_user(&self, _token: &str) -> ClientResult<User> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.users, "current_user")
    }

    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.products, "fetch_products")
    }
}

// =============================================================================
// Store Builders
// =============================================================================

fn build(tokens: MemoryTokenStore, policy: LogoutCartPolicy) -> (Store, Arc<MockApi>) {
    let api = Arc::new(MockApi::default());
    let config = StoreConfig { logout_cart: policy, ..StoreConfig::default() };
    let store =
        Store::initialize(config, Arc::clone(&api) as Arc<dyn RemoteApi>, Arc::new(tokens))
            .expect("memory token store cannot fail");
    (store, api)
}

/// Logged-out store over a scripted API.
pub(crate) fn mock_store() -> (Store, Arc<MockApi>) {
    build(MemoryTokenStore::new(), LogoutCartPolicy::RetainCart)
}

/// Store bootstrapped from a persisted token, as if a previous session
/// saved one.
pub(crate) fn mock_store_with_token(token: &str) -> (Store, Arc<MockApi>) {
    build(MemoryTokenStore::with_token(token), LogoutCartPolicy::RetainCart)
}

/// Same, with the clear-cart-on-logout policy enabled.
pub(crate) fn mock_store_cleared_on_logout(token: &str) -> (Store, Arc<MockApi>) {
    build(MemoryTokenStore::with_token(token), LogoutCartPolicy::ClearCart)
}
