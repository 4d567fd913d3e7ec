//! Error types for the core cart primitives.

use thiserror::Error;

use crate::types::ProductId;

/// A snapshot violates the cart invariants.
///
/// Raised when adopting items from storage; a violating snapshot is treated
/// as malformed data by the caller.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The same product id appears on more than one line.
    #[error("duplicate product in cart: {0}")]
    DuplicateProduct(ProductId),

    /// A line item has quantity 0. Zero-quantity lines must be removed,
    /// never stored.
    #[error("product {0} has quantity 0, lines must have quantity >= 1")]
    ZeroQuantity(ProductId),
}

/// A snapshot could not be encoded or decoded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON (de)serialization failed.
    #[error("snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
