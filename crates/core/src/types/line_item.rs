//! Cart line items.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::GameId;
use super::price::Price;

/// Errors produced when constructing a [`CartLineItem`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineItemError {
    #[error("line item title must not be empty")]
    EmptyTitle,
}

/// One entry in the cart.
///
/// Caches the display fields of the purchasable item at the time it was
/// added. Serialized with the persisted field names (`imageUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Purchasable item; unique within a cart.
    pub id: GameId,
    /// Display name.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Display asset reference. Not validated.
    pub image_url: String,
}

impl CartLineItem {
    /// Create a new line item.
    ///
    /// # Errors
    ///
    /// Returns `LineItemError::EmptyTitle` if the title is blank.
    pub fn new(
        id: GameId,
        title: impl Into<String>,
        price: Price,
        image_url: impl Into<String>,
    ) -> Result<Self, LineItemError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LineItemError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            price,
            image_url: image_url.into(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_blank_title() {
        let result = CartLineItem::new(GameId::new(1), "  ", Price::ZERO, "x");
        assert_eq!(result, Err(LineItemError::EmptyTitle));
    }

    #[test]
    fn test_persisted_field_names() {
        let item = CartLineItem::new(
            GameId::new(1),
            "Elden Ring",
            Price::new(49.9).unwrap(),
            "/elden-ring.avif",
        )
        .unwrap();

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Elden Ring",
                "price": 49.9,
                "imageUrl": "/elden-ring.avif",
            })
        );
    }

    #[test]
    fn test_decode_rejects_missing_or_bad_price() {
        let missing = serde_json::json!({"id": 1, "title": "A", "imageUrl": "x"});
        assert!(serde_json::from_value::<CartLineItem>(missing).is_err());

        let null = serde_json::json!({"id": 1, "title": "A", "price": null, "imageUrl": "x"});
        assert!(serde_json::from_value::<CartLineItem>(null).is_err());

        let text = serde_json::json!({"id": 1, "title": "A", "price": "abc", "imageUrl": "x"});
        assert!(serde_json::from_value::<CartLineItem>(text).is_err());
    }
}
