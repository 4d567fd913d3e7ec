//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use gomarket_cart::{CartConfig, CartStore};
use gomarket_cart_core::{Product, ProductId};
use gomarket_cart_store::{KvStore, MemoryKv, Result, StoreError};

/// Build a catalog product with deterministic fields derived from the id.
pub fn product(id: &str) -> Product {
    Product {
        id: ProductId::from(id),
        title: format!("Product {}", id),
        image_url: format!("https://img.example/{}.png", id),
        price: 9.99,
    }
}

/// A test fixture with a shared in-memory store and default config.
///
/// The store outlives the carts created from it, so tests can reload and
/// inspect the persisted snapshot between sessions.
pub struct TestFixture {
    pub kv: Arc<MemoryKv>,
    pub config: CartConfig,
}

impl TestFixture {
    /// Create a fixture with an empty store.
    pub fn new() -> Self {
        Self {
            kv: Arc::new(MemoryKv::new()),
            config: CartConfig::default(),
        }
    }

    /// Load a cart from the fixture's store, as a fresh session would.
    pub async fn cart(&self) -> CartStore<Arc<MemoryKv>> {
        CartStore::load(Arc::clone(&self.kv), self.config.clone()).await
    }

    /// Pre-populate the snapshot key, simulating an earlier session.
    pub async fn seed_snapshot(&self, raw: &str) {
        self.kv
            .set(&self.config.storage_key(), raw)
            .await
            .expect("memory store never fails");
    }

    /// Read back whatever is persisted under the snapshot key.
    pub async fn stored_snapshot(&self) -> Option<String> {
        self.kv
            .get(&self.config.storage_key())
            .await
            .expect("memory store never fails")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A store wrapper with switchable fault injection.
///
/// Delegates to an in-memory store; reads and writes can independently be
/// made to fail, for exercising the recoverable-error paths.
#[derive(Default)]
pub struct FlakyKv {
    inner: MemoryKv,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyKv {
    /// Create a healthy store; flip the switches to inject faults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `get` calls fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `set` calls fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KvStore for FlakyKv {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected read failure".into()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected write failure".into()));
        }
        self.inner.set(key, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomarket_cart::AddResult;

    #[tokio::test]
    async fn test_fixture_sessions_share_storage() {
        let fixture = TestFixture::new();

        let session1 = fixture.cart().await;
        session1.add_to_cart(product("p1")).await.unwrap();
        drop(session1);

        let session2 = fixture.cart().await;
        assert_eq!(session2.products().len(), 1);
        assert_eq!(
            session2.add_to_cart(product("p1")).await.unwrap(),
            AddResult::AlreadyInCart
        );
    }

    #[tokio::test]
    async fn test_flaky_kv_injects_faults() {
        let kv = FlakyKv::new();
        kv.set("k", "v").await.unwrap();

        kv.fail_reads(true);
        assert!(kv.get("k").await.is_err());

        kv.fail_reads(false);
        assert_eq!(kv.get("k").await.unwrap().as_deref(), Some("v"));

        kv.fail_writes(true);
        assert!(kv.set("k", "w").await.is_err());
    }

    #[tokio::test]
    async fn test_failed_initial_read_degrades_to_empty_cart() {
        let kv = FlakyKv::new();
        kv.set("@GoMarketPlace:products", r#"[{"id":"p1","title":"t","image_url":"u","price":1.0,"quantity":1}]"#)
            .await
            .unwrap();

        kv.fail_reads(true);
        let cart = CartStore::load(kv, CartConfig::default()).await;
        assert!(cart.products().is_empty());
    }
}
