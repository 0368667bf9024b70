//! # Cart State Manager
//!
//! Remote cart mutations and the reconciliation of their authoritative
//! responses into the local mirror.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operation Flow                                  │
//! │                                                                         │
//! │  UI action                                                              │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  token guard ── no token ──► Err(Unauthorized), zero network traffic    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  RemoteApi call (suspension point; other dispatches interleave)         │
//! │      │                                                                  │
//! │      ├── Ok(authoritative line) ──► commit reconciliation event         │
//! │      │                                                                  │
//! │      └── Err ──► return Err; items and status untouched                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No operation applies a local guess before the server answers, and only
//! [`fetch`](CartManager::fetch) drives the cart status flag; mutation
//! failures surface solely as the returned error.
//!
//! Overlapping mutations for the same product resolve last-response-wins:
//! each response is authoritative for its own call, and whichever commit
//! lands last overwrites the line. Nothing serializes per-product intent at
//! this layer.

use std::sync::Arc;

use tracing::{debug, warn};

use shopfront_core::{CartEvent, CartItem, Lifecycle, StoreEvent};

use crate::error::ClientResult;
use crate::store::StoreInner;

/// Handle for cart operations. Cheap to clone; all handles share the store.
#[derive(Clone)]
pub struct CartManager {
    inner: Arc<StoreInner>,
}

impl CartManager {
    pub(crate) fn new(inner: Arc<StoreInner>) -> Self {
        CartManager { inner }
    }

    /// Replaces the mirror with the server's cart.
    ///
    /// Drives the status flag: Loading while in flight, then Idle on
    /// success or Failed on error (items keep their previous contents on
    /// failure).
    pub async fn fetch(&self) -> ClientResult<()> {
        let token = self.inner.require_token()?;
        debug!("Fetching cart");
        self.inner.commit(StoreEvent::Cart(CartEvent::Fetch(Lifecycle::Pending)));

        match self.inner.api.fetch_cart(&token).await {
            Ok(items) => {
                self.inner.commit(StoreEvent::Cart(CartEvent::Fetch(Lifecycle::Fulfilled(items))));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Cart fetch failed");
                self.inner.commit(StoreEvent::Cart(CartEvent::Fetch(Lifecycle::Rejected)));
                Err(e)
            }
        }
    }

    /// Adds `quantity` of a product. Returns the server's resulting line,
    /// which has already been reconciled into the mirror (overwrite if the
    /// product was present, append otherwise).
    pub async fn add_item(&self, product_id: u64, quantity: i64) -> ClientResult<CartItem> {
        let token = self.inner.require_token()?;
        debug!(product_id, quantity, "Adding cart item");

        let line = self.inner.api.add_item(&token, product_id, quantity).await?;
        self.inner.commit(StoreEvent::Cart(CartEvent::Added(line.clone())));
        Ok(line)
    }

    /// Removes every line for `product_id`. Issues the remote call even if
    /// the mirror holds no such line; removing an absent product is a
    /// data-model no-op.
    pub async fn remove_item(&self, product_id: u64) -> ClientResult<()> {
        let token = self.inner.require_token()?;
        debug!(product_id, "Removing cart item");

        self.inner.api.remove_item(&token, product_id).await?;
        self.inner.commit(StoreEvent::Cart(CartEvent::Removed(product_id)));
        Ok(())
    }

    /// Increases a line's quantity by `delta`. Reconciliation mirrors
    /// [`add_item`](Self::add_item): overwrite if present, append if the
    /// server knows a line the mirror lost.
    pub async fn increase_quantity(&self, product_id: u64, delta: i64) -> ClientResult<CartItem> {
        let token = self.inner.require_token()?;
        debug!(product_id, delta, "Increasing quantity");

        let line = self.inner.api.increase_quantity(&token, product_id, delta).await?;
        self.inner.commit(StoreEvent::Cart(CartEvent::Increased(line.clone())));
        Ok(line)
    }

    /// Decreases a line's quantity by `delta`. If the server's resulting
    /// quantity is ≤ 0 the line is removed from the mirror rather than
    /// stored non-positive.
    pub async fn decrease_quantity(&self, product_id: u64, delta: i64) -> ClientResult<CartItem> {
        let token = self.inner.require_token()?;
        debug!(product_id, delta, "Decreasing quantity");

        let line = self.inner.api.decrease_quantity(&token, product_id, delta).await?;
        self.inner.commit(StoreEvent::Cart(CartEvent::Decreased(line.clone())));
        Ok(line)
    }

    /// Empties the cart on the server, then the mirror.
    pub async fn clear(&self) -> ClientResult<()> {
        let token = self.inner.require_token()?;
        debug!("Clearing cart");

        self.inner.api.clear_cart(&token).await?;
        self.inner.commit(StoreEvent::Cart(CartEvent::Cleared));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::testing::{mock_store, mock_store_with_token, sample_line};
    use shopfront_core::CartStatus;

    #[tokio::test]
    async fn test_unauthenticated_add_issues_no_network_call() {
        let (store, api) = mock_store();

        let err = store.cart().add_item(1, 2).await.unwrap_err();

        assert!(matches!(err, ClientError::Unauthorized));
        assert_eq!(api.call_count(), 0);
        assert!(store.snapshot().cart.is_empty());
    }

    #[tokio::test]
    async fn test_unauthenticated_fetch_leaves_status_untouched() {
        let (store, api) = mock_store();

        let err = store.cart().fetch().await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(api.call_count(), 0);
        assert_eq!(store.snapshot().cart.status, CartStatus::Idle);
    }

    #[tokio::test]
    async fn test_fetch_replaces_mirror() {
        let (store, api) = mock_store_with_token("tok");
        api.script_fetch_cart(Ok(vec![sample_line(10, 1, 2), sample_line(11, 2, 1)]));

        store.cart().fetch().await.unwrap();

        let cart = store.snapshot().cart;
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.status, CartStatus::Idle);
    }

    #[tokio::test]
    async fn test_fetch_failure_sets_failed_and_keeps_items() {
        let (store, api) = mock_store_with_token("tok");
        api.script_fetch_cart(Ok(vec![sample_line(10, 1, 2)]));
        store.cart().fetch().await.unwrap();

        api.script_fetch_cart(Err(ClientError::Transport("connection reset".into())));
        let err = store.cart().fetch().await.unwrap_err();

        assert!(err.is_transport());
        let cart = store.snapshot().cart;
        assert_eq!(cart.status, CartStatus::Failed);
        assert_eq!(cart.items, vec![sample_line(10, 1, 2)]);
    }

    #[tokio::test]
    async fn test_add_new_product_appends_server_line() {
        let (store, api) = mock_store_with_token("tok");
        api.script_line(Ok(sample_line(10, 1, 4)));

        let line = store.cart().add_item(1, 4).await.unwrap();

        assert_eq!(line.quantity, 4);
        let cart = store.snapshot().cart;
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item(1).unwrap().quantity, 4);
    }

    #[tokio::test]
    async fn test_add_existing_product_overwrites_with_server_quantity() {
        let (store, api) = mock_store_with_token("tok");
        api.script_line(Ok(sample_line(10, 1, 2)));
        store.cart().add_item(1, 2).await.unwrap();

        // Server sums on its side and returns the resulting line.
        api.script_line(Ok(sample_line(10, 1, 3)));
        store.cart().add_item(1, 1).await.unwrap();

        let cart = store.snapshot().cart;
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item(1).unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_increase_scenario_from_two_to_three() {
        let (store, api) = mock_store_with_token("tok");
        api.script_fetch_cart(Ok(vec![sample_line(10, 1, 2)]));
        store.cart().fetch().await.unwrap();

        api.script_line(Ok(sample_line(10, 1, 3)));
        store.cart().increase_quantity(1, 1).await.unwrap();

        assert_eq!(store.snapshot().cart.items, vec![sample_line(10, 1, 3)]);
    }

    #[tokio::test]
    async fn test_decrease_to_zero_removes_line() {
        let (store, api) = mock_store_with_token("tok");
        api.script_fetch_cart(Ok(vec![sample_line(10, 1, 1)]));
        store.cart().fetch().await.unwrap();

        api.script_line(Ok(sample_line(10, 1, 0)));
        store.cart().decrease_quantity(1, 1).await.unwrap();

        assert!(store.snapshot().cart.item(1).is_none());
    }

    #[tokio::test]
    async fn test_remove_twice_is_idempotent() {
        let (store, api) = mock_store_with_token("tok");
        api.script_fetch_cart(Ok(vec![sample_line(10, 1, 2)]));
        store.cart().fetch().await.unwrap();

        store.cart().remove_item(1).await.unwrap();
        store.cart().remove_item(1).await.unwrap();

        assert!(store.snapshot().cart.item(1).is_none());
        // Both calls reached the server even though the second matched
        // nothing locally.
        assert_eq!(api.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mutation_failure_leaves_items_and_status_untouched() {
        let (store, api) = mock_store_with_token("tok");
        api.script_fetch_cart(Ok(vec![sample_line(10, 1, 2)]));
        store.cart().fetch().await.unwrap();

        api.script_line(Err(ClientError::Transport("timeout".into())));
        let err = store.cart().increase_quantity(1, 1).await.unwrap_err();

        assert!(err.is_transport());
        let cart = store.snapshot().cart;
        assert_eq!(cart.items, vec![sample_line(10, 1, 2)]);
        assert_eq!(cart.status, CartStatus::Idle);
    }

    #[tokio::test]
    async fn test_remove_failure_keeps_line() {
        let (store, api) = mock_store_with_token("tok");
        api.script_fetch_cart(Ok(vec![sample_line(10, 1, 2)]));
        store.cart().fetch().await.unwrap();

        api.script_unit(Err(ClientError::Api { status: 500, message: "boom".into() }));
        store.cart().remove_item(1).await.unwrap_err();

        assert_eq!(store.snapshot().cart.items, vec![sample_line(10, 1, 2)]);
    }

    #[tokio::test]
    async fn test_clear_empties_mirror() {
        let (store, api) = mock_store_with_token("tok");
        api.script_fetch_cart(Ok(vec![sample_line(10, 1, 2), sample_line(11, 2, 5)]));
        store.cart().fetch().await.unwrap();

        store.cart().clear().await.unwrap();

        assert!(store.snapshot().cart.is_empty());
    }
}
