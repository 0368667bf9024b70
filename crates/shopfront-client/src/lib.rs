//! # shopfront-client: Store Core and I/O Layer for Shopfront
//!
//! This crate wires the pure state machine in `shopfront-core` to the real
//! world: the remote shop API, the durable token file, and the subscribers
//! that re-render when state changes.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Client Engine Architecture                          │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Store (store.rs)                            │  │
//! │  │                                                                  │  │
//! │  │  Holds AppState behind the commit boundary                       │  │
//! │  │  Snapshot reads • broadcast subscriptions • manager handles      │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │  AuthManager   │  │  CartManager   │  │  ProductsManager       │    │
//! │  │                │  │                │  │                        │    │
//! │  │ login/logout   │  │ fetch + remote │  │ catalog fetch and      │    │
//! │  │ expiry check   │  │ mutations with │  │ local edits            │    │
//! │  │ profile fetch  │  │ reconciliation │  │                        │    │
//! │  └───────┬────────┘  └───────┬────────┘  └───────────┬────────────┘    │
//! │          │                   │                       │                 │
//! │          ▼                   ▼                       ▼                 │
//! │  ┌────────────────┐  ┌──────────────────────────────────────────────┐  │
//! │  │  TokenStore    │  │  RemoteApi (api.rs)                          │  │
//! │  │  (one durable  │  │  trait seam; HttpApi = reqwest + bearer auth │  │
//! │  │   key on disk) │  │                                              │  │
//! │  └────────────────┘  └──────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopfront_client::{Store, StoreConfig};
//!
//! // Bootstrap once at process start; recovers the persisted session.
//! let store = Store::open(StoreConfig::from_env())?;
//! store.auth().check_token_validity();
//!
//! // React to committed transitions.
//! let mut changes = store.subscribe();
//!
//! // Mirror the server's cart and mutate it.
//! store.cart().fetch().await?;
//! store.cart().add_item(42, 1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod auth;
pub mod cart;
pub mod error;
pub mod products;
pub mod store;
pub mod token_store;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{HttpApi, RemoteApi};
pub use auth::{AuthManager, RegisterOutcome};
pub use cart::CartManager;
pub use error::{ClientError, ClientResult};
pub use products::ProductsManager;
pub use store::{LogoutCartPolicy, Store, StoreConfig};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
