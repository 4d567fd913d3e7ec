//! Proptest generators for property-based testing.

use proptest::prelude::*;

use gomarket_cart_core::{CartItem, CartState, Product, ProductId};

/// Generate a random ProductId.
pub fn product_id() -> impl Strategy<Value = ProductId> {
    "[a-z0-9]{1,12}".prop_map(ProductId::from)
}

/// Generate a ProductId from a small universe, so mutation sequences hit
/// existing lines often.
pub fn small_product_id() -> impl Strategy<Value = ProductId> {
    "[a-e]".prop_map(ProductId::from)
}

/// Generate a plausible unit price (two decimal places, > 0).
pub fn price() -> impl Strategy<Value = f64> {
    (1u32..=1_000_00).prop_map(|cents| f64::from(cents) / 100.0)
}

/// Generate a catalog product with the given id strategy.
pub fn product_with(id: impl Strategy<Value = ProductId>) -> impl Strategy<Value = Product> {
    (id, "[A-Za-z ]{1,24}", price()).prop_map(|(id, title, price)| Product {
        image_url: format!("https://img.example/{}.png", id),
        id,
        title,
        price,
    })
}

/// Generate a catalog product.
pub fn product() -> impl Strategy<Value = Product> {
    product_with(product_id())
}

/// Generate a cart line item with quantity >= 1.
pub fn cart_item() -> impl Strategy<Value = CartItem> {
    (product(), 1u32..=20).prop_map(|(product, quantity)| {
        let mut item = product.into_item();
        item.quantity = quantity;
        item
    })
}

/// Generate a valid cart state: unique ids, all quantities >= 1.
pub fn cart_state(max_lines: usize) -> impl Strategy<Value = CartState> {
    prop::collection::vec(cart_item(), 0..=max_lines).prop_map(|items| {
        let mut unique: Vec<CartItem> = Vec::new();
        for item in items {
            if !unique.iter().any(|other| other.id == item.id) {
                unique.push(item);
            }
        }
        CartState::from_items(unique).expect("deduplicated items are valid")
    })
}

/// One cart mutation.
#[derive(Debug, Clone)]
pub enum CartOp {
    Add(Product),
    Increment(ProductId),
    Decrement(ProductId),
}

/// Generate a single mutation over a small id universe.
pub fn cart_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        product_with(small_product_id()).prop_map(CartOp::Add),
        small_product_id().prop_map(CartOp::Increment),
        small_product_id().prop_map(CartOp::Decrement),
    ]
}

/// Generate a mutation sequence.
pub fn cart_ops(max_len: usize) -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(cart_op(), 0..=max_len)
}

/// Apply a mutation to a cart state.
pub fn apply(state: &mut CartState, op: CartOp) {
    match op {
        CartOp::Add(product) => {
            state.add(product);
        }
        CartOp::Increment(id) => state.increment(&id),
        CartOp::Decrement(id) => state.decrement(&id),
    }
}
