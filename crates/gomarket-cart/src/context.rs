//! Explicit dependency-injection handle for the cart.
//!
//! Consumers receive a `CartContext` instead of reaching for an ambient
//! singleton. The context starts empty; wiring code provides the store
//! once, and any access before that is a programming error that fails
//! immediately rather than pretending the cart is empty.

use std::sync::{Arc, OnceLock};

use gomarket_cart_store::KvStore;

use crate::cart::CartStore;
use crate::error::{CartError, Result};

/// A provide-once handle to a [`CartStore`].
///
/// `const`-constructible, so it can live in a `static` and be shared by
/// reference across the app.
pub struct CartContext<S: KvStore> {
    slot: OnceLock<Arc<CartStore<S>>>,
}

impl<S: KvStore> CartContext<S> {
    /// Create an empty context. No cart is reachable until
    /// [`provide`](Self::provide) is called.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Wire the store into the context. May be called exactly once.
    pub fn provide(&self, store: CartStore<S>) -> Result<()> {
        self.slot
            .set(Arc::new(store))
            .map_err(|_| CartError::AlreadyProvided)
    }

    /// Access the cart.
    ///
    /// Fails with [`CartError::NotProvided`] if no store has been wired in;
    /// that error indicates a wiring bug and should not be swallowed.
    pub fn cart(&self) -> Result<Arc<CartStore<S>>> {
        self.slot.get().cloned().ok_or(CartError::NotProvided)
    }

    /// Whether a store has been provided.
    pub fn is_provided(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<S: KvStore> Default for CartContext<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartConfig;
    use gomarket_cart_store::MemoryKv;

    #[tokio::test]
    async fn test_access_before_provide_fails_fast() {
        let context: CartContext<MemoryKv> = CartContext::new();
        assert!(!context.is_provided());
        assert!(matches!(context.cart(), Err(CartError::NotProvided)));
    }

    #[tokio::test]
    async fn test_provide_then_access() {
        let context = CartContext::new();
        let store = CartStore::empty(MemoryKv::new(), CartConfig::default());
        context.provide(store).unwrap();

        let cart = context.cart().unwrap();
        assert!(cart.products().is_empty());
    }

    #[tokio::test]
    async fn test_double_provide_is_rejected() {
        let context = CartContext::new();
        context
            .provide(CartStore::empty(MemoryKv::new(), CartConfig::default()))
            .unwrap();

        let second = CartStore::empty(MemoryKv::new(), CartConfig::default());
        assert!(matches!(
            context.provide(second),
            Err(CartError::AlreadyProvided)
        ));
    }
}
