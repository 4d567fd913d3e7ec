//! # GoMarket Cart
//!
//! A persistent shopping-cart state container. The cart holds an ordered,
//! id-unique list of line items in memory, mirrors every mutation to
//! key-value storage under a fixed namespaced key, and restores itself from
//! the stored snapshot at startup.
//!
//! ## Overview
//!
//! - [`CartStore`] - the state container: `add_to_cart`, `increment`,
//!   `decrement`, plus the `products` read model
//! - [`CartContext`] - explicit dependency-injection handle; accessing it
//!   before a store is provided fails fast
//! - [`CartConfig`] - storage namespace configuration
//!
//! Mutations are serialized through an internal lock and always compute
//! from the latest committed state, so back-to-back calls can never lose
//! updates to each other. A failed storage write keeps the in-memory
//! mutation and surfaces [`CartError::Persistence`]; the next successful
//! write reconciles storage, since every write is a full snapshot.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gomarket_cart::{CartConfig, CartStore, Product, ProductId};
//! use gomarket_cart::store::SqliteKv;
//!
//! async fn example() {
//!     let kv = SqliteKv::open("cart.db").unwrap();
//!     let cart = CartStore::load(kv, CartConfig::default()).await;
//!
//!     cart.add_to_cart(Product {
//!         id: ProductId::from("p1"),
//!         title: "Shirt".into(),
//!         image_url: "https://img.example/shirt.png".into(),
//!         price: 10.0,
//!     })
//!     .await
//!     .unwrap();
//!
//!     assert_eq!(cart.products()[0].quantity, 1);
//! }
//! ```

pub mod cart;
pub mod context;
pub mod error;

// Re-export component crates
pub use gomarket_cart_core as core;
pub use gomarket_cart_store as store;

// Re-export main types for convenience
pub use cart::{AddResult, CartConfig, CartStore};
pub use context::CartContext;
pub use error::{CartError, Result};

// Re-export commonly used core types
pub use gomarket_cart_core::{CartItem, CartState, Product, ProductId};
