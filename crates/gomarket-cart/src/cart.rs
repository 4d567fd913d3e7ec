//! The CartStore: cart state plus its storage mirror.
//!
//! All mutations go through one lock and compute from the latest committed
//! state, so two back-to-back calls can never clobber each other's effect.
//! The lock is held through commit and persist; the single-key snapshot in
//! storage therefore always reflects the most recently completed mutation.

use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use gomarket_cart_core::{snapshot, CartItem, CartState, Product, ProductId};
use gomarket_cart_store::KvStore;

use crate::error::{CartError, Result};

pub use gomarket_cart_core::AddOutcome as AddResult;

/// Configuration for the cart store.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Namespace prefixed to the storage key, isolating the cart's blob
    /// from other app subsystems sharing the same store.
    pub namespace: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            namespace: "@GoMarketPlace".to_string(),
        }
    }
}

impl CartConfig {
    /// The fixed key the cart snapshot lives under.
    pub fn storage_key(&self) -> String {
        format!("{}:products", self.namespace)
    }
}

/// The cart state container.
///
/// Holds the committed sequence in memory, mirrors every mutation to the
/// key-value store as a full JSON snapshot, and exposes the sequence as a
/// read model plus a change channel for dependents.
pub struct CartStore<S: KvStore> {
    /// The storage backend.
    kv: S,
    /// The namespaced key the snapshot is written under.
    key: String,
    /// The committed state. Mutators lock this for the whole
    /// compute-commit-persist span.
    state: Mutex<CartState>,
    /// Broadcasts the committed sequence to read-model subscribers.
    products_tx: watch::Sender<Vec<CartItem>>,
}

impl<S: KvStore> CartStore<S> {
    /// Create a cart without touching storage. Starts empty.
    pub fn empty(kv: S, config: CartConfig) -> Self {
        Self::with_state(kv, config, CartState::new())
    }

    /// Create a cart, restoring the snapshot stored under the configured
    /// key.
    ///
    /// Startup failures are recoverable by design: a read error, a
    /// malformed snapshot, or one violating the cart invariants is logged
    /// and degraded to an empty cart. The app keeps working; the snapshot
    /// is replaced wholesale on the next successful write.
    pub async fn load(kv: S, config: CartConfig) -> Self {
        let key = config.storage_key();

        let state = match kv.get(&key).await {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(items) => match CartState::from_items(items) {
                    Ok(state) => state,
                    Err(e) => {
                        warn!(error = %e, "stored cart violates invariants, starting empty");
                        CartState::new()
                    }
                },
                Err(e) => {
                    warn!(error = %e, "stored cart snapshot is malformed, starting empty");
                    CartState::new()
                }
            },
            Ok(None) => CartState::new(),
            Err(e) => {
                warn!(error = %e, "cart snapshot read failed, starting empty");
                CartState::new()
            }
        };

        Self::with_state(kv, config, state)
    }

    fn with_state(kv: S, config: CartConfig, state: CartState) -> Self {
        let (products_tx, _) = watch::channel(state.items().to_vec());
        Self {
            kv,
            key: config.storage_key(),
            state: Mutex::new(state),
            products_tx,
        }
    }

    /// The committed sequence, in insertion order.
    pub fn products(&self) -> Vec<CartItem> {
        self.products_tx.borrow().clone()
    }

    /// Subscribe to read-model changes.
    ///
    /// The receiver is notified on every commit, including commits whose
    /// storage write later failed (the in-memory state is still the truth
    /// for the session).
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.products_tx.subscribe()
    }

    /// Add a product to the cart with quantity 1.
    ///
    /// If a line with the same id already exists this is a complete no-op:
    /// no state change and no storage write. Growing an existing line is
    /// what [`increment`](Self::increment) is for.
    pub async fn add_to_cart(&self, product: Product) -> Result<AddResult> {
        let mut state = self.state.lock().await;

        if let outcome @ AddResult::AlreadyInCart = state.add(product) {
            debug!("product already in cart, nothing to do");
            return Ok(outcome);
        }

        self.commit(&state);
        self.persist(&state).await?;
        Ok(AddResult::Added)
    }

    /// Increase the quantity of the line matching `id` by one.
    ///
    /// A missing id changes nothing, but the (unchanged) sequence is still
    /// committed and persisted.
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        let mut state = self.state.lock().await;
        state.increment(id);
        self.commit(&state);
        self.persist(&state).await
    }

    /// Decrease the quantity of the line matching `id` by one, removing the
    /// line when it reaches zero.
    ///
    /// A missing id changes nothing, but the (unchanged) sequence is still
    /// committed and persisted.
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        let mut state = self.state.lock().await;
        state.decrement(id);
        self.commit(&state);
        self.persist(&state).await
    }

    /// Publish the committed sequence to read-model subscribers.
    fn commit(&self, state: &CartState) {
        self.products_tx.send_replace(state.items().to_vec());
    }

    /// Mirror the committed sequence to storage as a full snapshot.
    ///
    /// Runs after the in-memory commit: a failed write leaves the session
    /// state correct and is surfaced as a recoverable error, and the next
    /// successful write reconciles storage.
    async fn persist(&self, state: &CartState) -> Result<()> {
        let raw = snapshot::encode(state.items())?;

        match self.kv.set(&self.key, &raw).await {
            Ok(()) => {
                debug!(lines = state.len(), "cart snapshot persisted");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "cart snapshot write failed, in-memory state retained");
                Err(CartError::Persistence(e))
            }
        }
    }
}
