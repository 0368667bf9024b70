//! # Cart Mirror State
//!
//! The local mirror of the server-side cart and the reconciliation rules
//! that fold authoritative server responses into it.
//!
//! ## Reconciliation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Reconciliation                                  │
//! │                                                                         │
//! │  Event                    Server returns        Local effect            │
//! │  ─────────────────        ──────────────        ─────────────────       │
//! │  Fetch(Fulfilled)         full item array       wholesale REPLACE       │
//! │  Added / Increased        resulting line        OVERWRITE quantity      │
//! │                                                 if present, else        │
//! │                                                 APPEND                  │
//! │  Decreased                resulting line        quantity ≤ 0: REMOVE    │
//! │                                                 else OVERWRITE          │
//! │  Removed                  (no body)             filter out product_id   │
//! │  Cleared                  (no body)             items = []              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities are never summed locally: the server's returned line already
//! accounts for the delta that was sent, and it fully replaces the client's
//! guess about that line.
//!
//! Only the fetch lifecycle drives [`CartStatus`]. Mutation events exist
//! only in fulfilled form — the managers commit them after a successful
//! response — so a failed mutation leaves both items and status untouched.

use serde::{Deserialize, Serialize};

use crate::event::Lifecycle;
use crate::types::CartItem;

/// Outcome of the most recently initiated cart fetch.
///
/// Not an aggregate of in-flight operations: a later fetch's phases simply
/// overwrite whatever an earlier one left here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// Local mirror of the server-side cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Cart lines in server order (insertion order preserved for display
    /// stability; correctness does not depend on it).
    pub items: Vec<CartItem>,

    pub status: CartStatus,
}

impl CartState {
    /// Looks up a line by product id.
    pub fn item(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart transitions.
///
/// Mutation variants carry the **authoritative** line returned by the
/// server, not the delta the client sent.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// Phases of a cart fetch. Fulfilled replaces the mirror wholesale.
    Fetch(Lifecycle<Vec<CartItem>>),

    /// Server accepted an add; payload is the resulting line.
    Added(CartItem),

    /// Server accepted a removal of every line with this product id.
    Removed(u64),

    /// Server accepted a quantity increase; payload is the resulting line.
    Increased(CartItem),

    /// Server accepted a quantity decrease; payload is the resulting line,
    /// whose quantity may be ≤ 0.
    Decreased(CartItem),

    /// Server accepted a full clear.
    Cleared,
}

/// Applies a cart transition.
pub fn apply(state: &mut CartState, event: &CartEvent) {
    match event {
        CartEvent::Fetch(Lifecycle::Pending) => {
            state.status = CartStatus::Loading;
        }
        CartEvent::Fetch(Lifecycle::Fulfilled(items)) => {
            state.items = items.clone();
            state.status = CartStatus::Idle;
        }
        CartEvent::Fetch(Lifecycle::Rejected) => {
            // Items keep their pre-fetch contents.
            state.status = CartStatus::Failed;
        }

        CartEvent::Added(line) | CartEvent::Increased(line) => upsert(state, line),

        CartEvent::Decreased(line) => {
            // A decrease for a line we do not mirror is dropped; the next
            // fetch resynchronizes.
            if let Some(pos) = state.items.iter().position(|i| i.product_id == line.product_id) {
                if line.quantity <= 0 {
                    state.items.remove(pos);
                } else {
                    state.items[pos].quantity = line.quantity;
                }
            }
        }

        CartEvent::Removed(product_id) => {
            state.items.retain(|i| i.product_id != *product_id);
        }

        CartEvent::Cleared => {
            state.items.clear();
        }
    }
}

/// Overwrite the existing line's quantity, or append the server's line if
/// this product is not mirrored yet.
fn upsert(state: &mut CartState, line: &CartItem) {
    if let Some(existing) = state.items.iter_mut().find(|i| i.product_id == line.product_id) {
        existing.quantity = line.quantity;
    } else {
        state.items.push(line.clone());
    }
}
