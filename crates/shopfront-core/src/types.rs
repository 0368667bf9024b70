//! # Wire Types
//!
//! Types shared with the remote shop server. All of them serialize as
//! camelCase JSON, matching the server contract exactly; the server is the
//! source of truth for every field here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product as returned by `GET /api/products`.
///
/// Read-only on the client: catalog entries are server-defined and the
/// engine never edits one in place (local catalog transitions replace whole
/// entries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Display price. Non-negative; the client performs no arithmetic on
    /// prices, it only mirrors what the server sends.
    pub price: f64,

    /// Image URI.
    pub image: String,

    pub category: ProductCategory,

    pub rating: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Catalog categories known to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Audio,
    Phone,
    Laptop,
    Accessory,
}

/// The narrow product view embedded in a cart line.
///
/// Frozen copy of the product at the time the line was created, so the cart
/// renders consistently even if the catalog entry changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub image: String,
}

/// A single cart line.
///
/// ## Invariants (enforced by the cart transitions)
/// - `product_id` is unique across the cart's item collection
/// - `quantity` is always ≥ 1; a line whose authoritative quantity drops to
///   zero is removed rather than stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Server-assigned identity of the cart line.
    pub id: u64,

    /// The product this line refers to.
    pub product_id: u64,

    pub quantity: i64,

    /// Embedded product snapshot for display.
    pub product: ProductSnapshot,
}

/// Profile returned by `GET /api/users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
