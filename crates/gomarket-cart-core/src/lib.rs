//! # GoMarket Cart Core
//!
//! Core primitives for the GoMarket shopping cart: line items, the ordered
//! cart sequence, and the JSON snapshot codec used for on-device persistence.
//!
//! ## Key Types
//!
//! - [`ProductId`] - Stable identifier of the underlying product
//! - [`Product`] - The shape of an item being added (no quantity yet)
//! - [`CartItem`] - One cart line: a product plus its quantity
//! - [`CartState`] - The ordered, id-unique sequence of line items
//! - [`AddOutcome`] - Result of adding a product to the sequence
//!
//! ## Invariants
//!
//! `CartState` maintains two invariants at all times:
//!
//! - Every line item has `quantity >= 1`. An item decremented to zero is
//!   removed from the sequence, never retained.
//! - At most one line per product id. Adding a product whose id is already
//!   present leaves the existing line untouched.
//!
//! Snapshots loaded from storage are re-validated against the same
//! invariants before being adopted.

pub mod error;
pub mod snapshot;
pub mod state;
pub mod types;

pub use error::{SnapshotError, ValidationError};
pub use snapshot::{decode, encode};
pub use state::{AddOutcome, CartState};
pub use types::{CartItem, Product, ProductId};
