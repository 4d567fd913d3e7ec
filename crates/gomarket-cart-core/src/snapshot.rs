//! The on-device snapshot codec.
//!
//! A cart is persisted as a JSON array of line objects with fields `id`,
//! `title`, `image_url`, `price`, `quantity`. This is the format carts were
//! stored in before this rewrite, so existing snapshots keep loading.
//!
//! Round-trip contract: decoding a previously encoded sequence yields an
//! equal sequence (same lines, same order, same field values).

use crate::error::SnapshotError;
use crate::types::CartItem;

/// Encode a cart sequence as its JSON snapshot.
pub fn encode(items: &[CartItem]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(items)?)
}

/// Decode a JSON snapshot back into a cart sequence.
///
/// Only checks the shape; invariant validation (unique ids, quantity >= 1)
/// is done by `CartState::from_items` on adoption.
pub fn decode(raw: &str) -> Result<Vec<CartItem>, SnapshotError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn item(id: &str, quantity: u32) -> CartItem {
        CartItem {
            id: ProductId::from(id),
            title: format!("Product {}", id),
            image_url: format!("https://img.example/{}.png", id),
            price: 12.5,
            quantity,
        }
    }

    #[test]
    fn test_roundtrip() {
        let items = vec![item("p1", 1), item("p2", 3)];
        let raw = encode(&items).unwrap();
        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn test_roundtrip_is_stable() {
        // encode(decode(encode(S))) == encode(S)
        let items = vec![item("p1", 2)];
        let first = encode(&items).unwrap();
        let second = encode(&decode(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_cart_is_empty_array() {
        assert_eq!(encode(&[]).unwrap(), "[]");
        assert_eq!(decode("[]").unwrap(), Vec::<CartItem>::new());
    }

    #[test]
    fn test_decodes_legacy_snapshot() {
        let raw = r#"[{"id":"p1","title":"Shirt","image_url":"u","price":10,"quantity":2}]"#;
        let items = decode(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ProductId::from("p1"));
        assert_eq!(items[0].price, 10.0);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_rejects_malformed_snapshot() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"id":"p1"}"#).is_err()); // object, not array
        assert!(decode(r#"[{"id":"p1"}]"#).is_err()); // missing fields
    }
}
