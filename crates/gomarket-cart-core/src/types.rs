//! Strong type definitions for the cart.
//!
//! Product identifiers are newtyped to prevent mixing them up with other
//! strings at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the underlying catalog product.
///
/// Stable across sessions: the same product always carries the same id, and
/// the cart is keyed by it (one line per id).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    /// Create a new ProductId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductId({})", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A catalog product as handed to `add_to_cart`.
///
/// Carries no quantity: the cart sets quantity to 1 on insert regardless of
/// anything the caller might think it knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable product identifier.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Reference to the product image.
    pub image_url: String,
    /// Price per unit at the time of adding. Not re-fetched afterwards.
    pub price: f64,
}

impl Product {
    /// Turn the product into a cart line with quantity 1.
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

/// One cart line: a product plus its quantity.
///
/// The serde field names (`id`, `title`, `image_url`, `price`, `quantity`)
/// are the on-device snapshot format and must not change without a
/// storage migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Stable product identifier, unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Reference to the product image.
    pub image_url: String,
    /// Price per unit captured when the item was added.
    pub price: f64,
    /// Number of units. Always >= 1 for items present in a cart.
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product {
            id: ProductId::from("p1"),
            title: "Shirt".to_string(),
            image_url: "https://img.example/shirt.png".to_string(),
            price: 10.0,
        }
    }

    #[test]
    fn test_product_id_display() {
        let id = ProductId::from("abc-123");
        assert_eq!(format!("{}", id), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_product_id_serializes_as_plain_string() {
        let id = ProductId::from("p1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");
    }

    #[test]
    fn test_into_item_sets_quantity_to_one() {
        let item = shirt().into_item();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, ProductId::from("p1"));
        assert_eq!(item.title, "Shirt");
    }

    #[test]
    fn test_cart_item_snapshot_field_names() {
        let item = shirt().into_item();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"image_url\""));
        assert!(json.contains("\"price\""));
        assert!(json.contains("\"quantity\""));
    }
}
