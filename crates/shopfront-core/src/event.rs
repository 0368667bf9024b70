//! # Store Events
//!
//! Every state change in the engine is a value of [`StoreEvent`], applied by
//! exactly one transition function. Asynchronous operations surface their
//! phases explicitly through [`Lifecycle`] instead of hidden status flags.

use crate::auth::AuthEvent;
use crate::cart::CartEvent;
use crate::products::ProductsEvent;

/// Explicit phases of an asynchronous operation.
///
/// ## Phase Flow
/// ```text
/// Pending ──────► Fulfilled(payload)
///    │
///    └─────────► Rejected
/// ```
///
/// A single operation's phases are committed in issuance order. Phases of
/// *different* operations interleave freely; the last applied response wins.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    /// The remote call has been issued; nothing authoritative yet.
    Pending,
    /// The server answered with an authoritative payload.
    Fulfilled(T),
    /// The call failed; local state keeps its previous data.
    Rejected,
}

/// The composed event type dispatched through the store core.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Auth(AuthEvent),
    Cart(CartEvent),
    Products(ProductsEvent),
}
