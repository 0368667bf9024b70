//! # Composed Application State
//!
//! The single process-wide state value: session, cart mirror, catalog
//! cache. The store core in `shopfront-client` owns one of these behind its
//! commit boundary; everything else sees snapshots.

use serde::{Deserialize, Serialize};

use crate::auth::{self, AuthState};
use crate::cart::{self, CartState};
use crate::event::StoreEvent;
use crate::products::{self, ProductsState};

/// Everything the engine mirrors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub auth: AuthState,
    pub cart: CartState,
    pub products: ProductsState,
}

impl AppState {
    /// Bootstrap state: the session as recovered from durable storage,
    /// cart and catalog empty until their first fetch.
    pub fn with_auth(auth: AuthState) -> Self {
        AppState { auth, ..AppState::default() }
    }

    /// Applies one committed event to the slice it addresses.
    pub fn apply(&mut self, event: &StoreEvent) {
        match event {
            StoreEvent::Auth(e) => auth::apply(&mut self.auth, e),
            StoreEvent::Cart(e) => cart::apply(&mut self.cart, e),
            StoreEvent::Products(e) => products::apply(&mut self.products, e),
        }
    }
}
