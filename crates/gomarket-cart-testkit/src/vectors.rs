//! Golden snapshot vectors.
//!
//! Known cart states paired with their exact on-device JSON. Any change to
//! the snapshot encoding shows up here before it corrupts stored carts:
//! every vector must encode to exactly `json` and decode back to `items`.

use gomarket_cart_core::{CartItem, ProductId};

/// A single golden vector: a cart state and its canonical snapshot.
pub struct GoldenVector {
    pub name: &'static str,
    pub description: &'static str,
    pub items: Vec<CartItem>,
    pub json: &'static str,
}

fn item(id: &str, title: &str, image_url: &str, price: f64, quantity: u32) -> CartItem {
    CartItem {
        id: ProductId::from(id),
        title: title.to_string(),
        image_url: image_url.to_string(),
        price,
        quantity,
    }
}

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty_cart",
            description: "A cart with no lines is the empty array",
            items: vec![],
            json: "[]",
        },
        GoldenVector {
            name: "single_line",
            description: "One product, freshly added",
            items: vec![item("p1", "Shirt", "https://img.example/shirt.png", 10.0, 1)],
            json: r#"[{"id":"p1","title":"Shirt","image_url":"https://img.example/shirt.png","price":10.0,"quantity":1}]"#,
        },
        GoldenVector {
            name: "two_lines_with_quantities",
            description: "Two products, one incremented, order preserved",
            items: vec![
                item("p1", "Shirt", "https://img.example/shirt.png", 10.0, 3),
                item("p2", "Mug", "https://img.example/mug.png", 4.5, 1),
            ],
            json: r#"[{"id":"p1","title":"Shirt","image_url":"https://img.example/shirt.png","price":10.0,"quantity":3},{"id":"p2","title":"Mug","image_url":"https://img.example/mug.png","price":4.5,"quantity":1}]"#,
        },
        GoldenVector {
            name: "fractional_price",
            description: "Prices keep their two decimal places",
            items: vec![item("p9", "Socks", "https://img.example/socks.png", 9.99, 2)],
            json: r#"[{"id":"p9","title":"Socks","image_url":"https://img.example/socks.png","price":9.99,"quantity":2}]"#,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomarket_cart_core::snapshot;

    #[test]
    fn test_vectors_encode_exactly() {
        for vector in all_vectors() {
            let raw = snapshot::encode(&vector.items).unwrap();
            assert_eq!(
                raw, vector.json,
                "encode mismatch for {} ({})",
                vector.name, vector.description
            );
        }
    }

    #[test]
    fn test_vectors_decode_exactly() {
        for vector in all_vectors() {
            let items = snapshot::decode(vector.json).unwrap();
            assert_eq!(
                items, vector.items,
                "decode mismatch for {} ({})",
                vector.name, vector.description
            );
        }
    }

    #[test]
    fn test_vector_json_matches_raw_serde_output() {
        // Bypass the snapshot codec: the vectors pin the serde encoding
        // itself, so a codec that rewrote the bytes would not hide here.
        for vector in all_vectors() {
            let raw = serde_json::to_string(&vector.items).unwrap();
            assert_eq!(
                raw, vector.json,
                "raw serde mismatch for {} ({})",
                vector.name, vector.description
            );

            let value: serde_json::Value = serde_json::from_str(vector.json).unwrap();
            assert_eq!(
                value,
                serde_json::to_value(&vector.items).unwrap(),
                "structural mismatch for {} ({})",
                vector.name,
                vector.description
            );
        }
    }

    #[test]
    fn test_vectors_are_valid_states() {
        for vector in all_vectors() {
            assert!(
                gomarket_cart_core::CartState::from_items(vector.items.clone()).is_ok(),
                "vector {} violates cart invariants",
                vector.name
            );
        }
    }
}
