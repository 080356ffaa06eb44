//! Persisted cart records
//!
//! The saved cart is one JSON array of these records under a single
//! storage key. The field set is a fixed external contract and is kept
//! separate from the in-memory types; conversions live here.

use serde::{Deserialize, Serialize};

use crate::item::{LineItem, Product};
use crate::CartError;

/// Wire shape of one cart line: `id`, `title`, `image_url`, `price`,
/// `quantity`. No versioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRecord {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&LineItem> for LineItemRecord {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.product.id.clone(),
            title: item.product.title.clone(),
            image_url: item.product.image_url.clone(),
            price: item.product.price,
            quantity: item.quantity(),
        }
    }
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = CartError;

    fn try_from(record: LineItemRecord) -> std::result::Result<Self, Self::Error> {
        LineItem::with_quantity(
            Product {
                id: record.id,
                title: record.title,
                image_url: record.image_url,
                price: record.price,
            },
            record.quantity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_fields_are_stable() {
        let item = LineItem::new(Product {
            id: "sku-1".to_string(),
            title: "Enamel Mug".to_string(),
            image_url: "https://cdn.example/mug.png".to_string(),
            price: 12.5,
        });

        let value = serde_json::to_value(LineItemRecord::from(&item)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "sku-1",
                "title": "Enamel Mug",
                "image_url": "https://cdn.example/mug.png",
                "price": 12.5,
                "quantity": 1,
            })
        );
    }

    #[test]
    fn test_record_round_trips_through_line_item() {
        let record: LineItemRecord = serde_json::from_value(json!({
            "id": "sku-2",
            "title": "Field Notebook",
            "image_url": "https://cdn.example/notebook.png",
            "price": 7.25,
            "quantity": 3,
        }))
        .unwrap();

        let item = LineItem::try_from(record).unwrap();
        assert_eq!(item.id(), "sku-2");
        assert_eq!(item.quantity(), 3);

        let back = serde_json::to_value(LineItemRecord::from(&item)).unwrap();
        assert_eq!(back["quantity"], 3);
        assert_eq!(back["price"], 7.25);
    }

    #[test]
    fn test_zero_quantity_record_is_rejected() {
        let record: LineItemRecord = serde_json::from_value(json!({
            "id": "sku-3",
            "title": "Sticker",
            "image_url": "https://cdn.example/sticker.png",
            "price": 1.0,
            "quantity": 0,
        }))
        .unwrap();

        assert!(LineItem::try_from(record).is_err());
    }
}
