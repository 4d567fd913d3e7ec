//! Error types for the cart facade.

use gomarket_cart_core::SnapshotError;
use gomarket_cart_store::StoreError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// A mutation was committed in memory but the follow-up storage write
    /// failed. The session state is still correct; the stored snapshot is
    /// stale until the next successful write.
    #[error("cart mutation not persisted: {0}")]
    Persistence(#[source] StoreError),

    /// The cart sequence could not be encoded for storage.
    #[error("cart snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// The cart was accessed through a context before a store was provided.
    /// This is a wiring bug in the caller and is never recovered here.
    #[error("cart accessed outside a provided context; call CartContext::provide first")]
    NotProvided,

    /// A store was provided to a context that already holds one.
    #[error("cart context already holds a store")]
    AlreadyProvided,
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
