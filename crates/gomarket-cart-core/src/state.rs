//! The cart sequence and its three mutations.
//!
//! `CartState` is pure and synchronous. Persistence and mutation ordering
//! live in the facade crate; this module only knows how one sequence turns
//! into the next.

use crate::error::ValidationError;
use crate::types::{CartItem, Product, ProductId};

/// Outcome of adding a product to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was appended as a new line with quantity 1.
    Added,
    /// A line with this id already exists. The sequence is untouched and
    /// callers must not persist (the existing snapshot is still exact).
    AlreadyInCart,
}

/// The ordered, id-unique sequence of cart line items.
///
/// Lines appear in insertion order. Removing a line leaves the relative
/// order of the survivors intact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adopt a sequence loaded from storage, re-checking the invariants.
    ///
    /// Rejects duplicate product ids and zero quantities; a rejected
    /// snapshot is malformed data and the caller falls back to empty.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, ValidationError> {
        for (i, item) in items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(ValidationError::ZeroQuantity(item.id.clone()));
            }
            if items[..i].iter().any(|other| other.id == item.id) {
                return Err(ValidationError::DuplicateProduct(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The current sequence, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether a line with this product id exists.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a product to the cart.
    ///
    /// Appends a new line with quantity 1. If a line with the same id is
    /// already present the sequence is left exactly as it was: re-adding is
    /// a no-op, not an increment. That is long-standing storefront behavior
    /// and callers depend on the no-write that comes with it.
    pub fn add(&mut self, product: Product) -> AddOutcome {
        if self.contains(&product.id) {
            return AddOutcome::AlreadyInCart;
        }
        self.items.push(product.into_item());
        AddOutcome::Added
    }

    /// Increase the quantity of the line matching `id` by one, saturating
    /// at `u32::MAX`.
    ///
    /// A missing id leaves the sequence unchanged; the caller still commits
    /// and persists the (identical) sequence.
    pub fn increment(&mut self, id: &ProductId) {
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Decrease the quantity of the line matching `id` by one.
    ///
    /// A line reaching quantity 0 is removed from the sequence. A missing id
    /// leaves the sequence unchanged; the caller still commits and persists.
    pub fn decrement(&mut self, id: &ProductId) {
        if let Some(pos) = self.items.iter().position(|item| &item.id == id) {
            if self.items[pos].quantity <= 1 {
                self.items.remove(pos);
            } else {
                self.items[pos].quantity -= 1;
            }
        }
    }
}
