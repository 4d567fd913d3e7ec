//! KvStore trait: the abstract interface for cart persistence.
//!
//! The cart treats storage as an opaque namespaced key-value store for
//! small string blobs. This trait keeps the cart storage-agnostic;
//! implementations include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;

use crate::error::Result;

/// Async key-value storage for small serialized blobs.
///
/// # Contract
///
/// - `get` of a key that was never written returns `Ok(None)`.
/// - `set` overwrites any previous value for the key (last write wins).
/// - Values survive process restarts for durable backends.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl<S: KvStore + ?Sized> KvStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}
