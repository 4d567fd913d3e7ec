//! # GoMarket Cart Store
//!
//! Key-value storage abstraction for the GoMarket cart. The cart persists
//! its snapshot under a single namespaced key; this crate provides the
//! [`KvStore`] trait for that collaborator plus two implementations.
//!
//! ## Key Types
//!
//! - [`KvStore`] - The async trait for namespaced string storage
//! - [`SqliteKv`] - SQLite-backed persistent storage (primary)
//! - [`MemoryKv`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gomarket_cart_store::{KvStore, SqliteKv};
//!
//! async fn example() {
//!     let kv = SqliteKv::open("cart.db").unwrap();
//!     kv.set("@GoMarketPlace:products", "[]").await.unwrap();
//!     let snapshot = kv.get("@GoMarketPlace:products").await.unwrap();
//!     assert_eq!(snapshot.as_deref(), Some("[]"));
//! }
//! ```

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryKv;
pub use sqlite::SqliteKv;
pub use traits::KvStore;
