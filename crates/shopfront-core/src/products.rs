//! # Catalog State
//!
//! Fetch-and-cache mirror of the product catalog, plus local catalog edits.
//! Much simpler than the cart: the catalog fetch is unauthenticated and the
//! local edits never round-trip to the server.

use serde::{Deserialize, Serialize};

use crate::event::Lifecycle;
use crate::types::Product;

/// Outcome of the most recent catalog fetch.
///
/// The catalog tracks a distinct `Succeeded` state (unlike the cart's
/// three-state status) so first-load UI can tell "never fetched" from
/// "fetched empty".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductsStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Local catalog mirror.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub status: ProductsStatus,
}

/// Catalog transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsEvent {
    /// Phases of a catalog fetch. Fulfilled replaces the cache wholesale.
    Fetch(Lifecycle<Vec<Product>>),

    /// Local-only append of a catalog entry.
    Added(Product),

    /// Local-only removal by product id.
    Removed(u64),

    /// Local-only replacement of the entry with the same id; unknown ids
    /// are dropped.
    Updated(Product),
}

/// Applies a catalog transition.
pub fn apply(state: &mut ProductsState, event: &ProductsEvent) {
    match event {
        ProductsEvent::Fetch(Lifecycle::Pending) => {
            state.status = ProductsStatus::Loading;
        }
        ProductsEvent::Fetch(Lifecycle::Fulfilled(products)) => {
            state.products = products.clone();
            state.status = ProductsStatus::Succeeded;
        }
        ProductsEvent::Fetch(Lifecycle::Rejected) => {
            state.status = ProductsStatus::Failed;
        }

        ProductsEvent::Added(product) => {
            state.products.push(product.clone());
        }
        ProductsEvent::Removed(product_id) => {
            state.products.retain(|p| p.id != *product_id);
        }
        ProductsEvent::Updated(product) => {
            if let Some(existing) = state.products.iter_mut().find(|p| p.id == product.id) {
                *existing = product.clone();
            }
        }
    }
}
