//! # GoMarket Cart Testkit
//!
//! Testing utilities for the GoMarket cart.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a pre-wired in-memory cart plus a fail-injecting store
//!   for exercising the persistence-failure path
//! - **Generators**: proptest strategies for products, cart states, and
//!   mutation sequences
//! - **Golden vectors**: known cart states with their exact JSON snapshots
//!
//! ## Fixtures
//!
//! ```rust
//! use gomarket_cart_testkit::fixtures::{product, TestFixture};
//!
//! # async fn example() {
//! let fixture = TestFixture::new();
//! let cart = fixture.cart().await;
//! cart.add_to_cart(product("p1")).await.unwrap();
//! # }
//! ```
//!
//! ## Property testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use gomarket_cart_testkit::generators::{apply, cart_ops, CartOp};
//!
//! proptest! {
//!     #[test]
//!     fn quantities_stay_positive(ops in cart_ops(32)) {
//!         let mut state = gomarket_cart::CartState::new();
//!         for op in ops {
//!             apply(&mut state, op);
//!         }
//!         prop_assert!(state.items().iter().all(|i| i.quantity >= 1));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{product, FlakyKv, TestFixture};
pub use generators::{apply, cart_op, cart_ops, cart_state, CartOp};
pub use vectors::{all_vectors, GoldenVector};
