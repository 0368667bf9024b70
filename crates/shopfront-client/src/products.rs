//! # Products State Manager
//!
//! Fetch-and-cache of the product catalog plus the local-only catalog
//! edits. The catalog fetch is the one unauthenticated remote operation in
//! the engine.

use std::sync::Arc;

use tracing::{debug, warn};

use shopfront_core::{Lifecycle, Product, ProductsEvent, StoreEvent};

use crate::error::ClientResult;
use crate::store::StoreInner;

/// Handle for catalog operations. Cheap to clone; all handles share the
/// store.
#[derive(Clone)]
pub struct ProductsManager {
    inner: Arc<StoreInner>,
}

impl ProductsManager {
    pub(crate) fn new(inner: Arc<StoreInner>) -> Self {
        ProductsManager { inner }
    }

    /// Replaces the catalog cache with the server's list. Drives the
    /// four-state catalog status; a failed refresh keeps the previous
    /// cache.
    pub async fn fetch(&self) -> ClientResult<()> {
        debug!("Fetching product catalog");
        self.inner.commit(StoreEvent::Products(ProductsEvent::Fetch(Lifecycle::Pending)));

        match self.inner.api.fetch_products().await {
            Ok(products) => {
                self.inner
                    .commit(StoreEvent::Products(ProductsEvent::Fetch(Lifecycle::Fulfilled(products))));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed");
                self.inner.commit(StoreEvent::Products(ProductsEvent::Fetch(Lifecycle::Rejected)));
                Err(e)
            }
        }
    }

    /// Appends a catalog entry locally.
    pub fn add(&self, product: Product) {
        self.inner.commit(StoreEvent::Products(ProductsEvent::Added(product)));
    }

    /// Removes a catalog entry locally.
    pub fn remove(&self, product_id: u64) {
        self.inner.commit(StoreEvent::Products(ProductsEvent::Removed(product_id)));
    }

    /// Replaces the cached entry with the same id; unknown ids are no-ops.
    pub fn update(&self, product: Product) {
        self.inner.commit(StoreEvent::Products(ProductsEvent::Updated(product)));
    }
}
