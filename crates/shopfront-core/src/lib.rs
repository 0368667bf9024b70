//! # shopfront-core: Pure State Machine for Shopfront
//!
//! This crate is the **heart** of the Shopfront client engine. It holds the
//! local mirror of server state (session, cart, catalog) and every rule for
//! changing it, as pure transition functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopfront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Host (pages, forms)                       │   │
//! │  │    Login page ──► Catalog page ──► Cart page ──► Profile       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ manager calls                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopfront-client                             │   │
//! │  │    Store core, AuthManager, CartManager, remote API adapter    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ StoreEvent                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   auth    │  │   cart    │  │ products  │  │   │
//! │  │   │  Product  │  │ AuthState │  │ CartState │  │ Products  │  │   │
//! │  │   │ CartItem  │  │  events   │  │  events   │  │  State    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE TRANSITION FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (Product, CartItem, User)
//! - [`event`] - The composed [`StoreEvent`] and the [`Lifecycle`] tag
//! - [`auth`] - Session state and transitions
//! - [`cart`] - Cart mirror state and reconciliation transitions
//! - [`products`] - Catalog state and transitions
//! - [`state`] - The composed [`AppState`] and top-level apply
//! - [`token`] - Session token expiry decoding
//! - [`error`] - Token decode errors
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: every state change is `apply(&mut state, &event)`
//!    with no other mutation path
//! 2. **Server Authority**: mutation events carry the server's resulting
//!    line item; local quantities are overwritten, never summed
//! 3. **Explicit Async Phases**: remote operations appear as a
//!    `Lifecycle<T>` tag (Pending / Fulfilled / Rejected), never as hidden
//!    flags

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod error;
pub mod event;
pub mod products;
pub mod state;
pub mod token;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use auth::{AuthEvent, AuthState};
pub use cart::{CartEvent, CartState, CartStatus};
pub use error::TokenError;
pub use event::{Lifecycle, StoreEvent};
pub use products::{ProductsEvent, ProductsState, ProductsStatus};
pub use state::AppState;
pub use types::{CartItem, Product, ProductCategory, ProductSnapshot, User};
