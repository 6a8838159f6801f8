//! Wire types for the payment-session server.

use eleora_commerce::cart::Cart;
use eleora_commerce::money::to_minor_units;
use serde::{Deserialize, Serialize};

/// One priced line in a checkout-session request.
///
/// Amounts are integer minor units (paise); the gateway refuses floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLineItem {
    /// Display name shown on the hosted payment page.
    pub name: String,
    /// Item description.
    pub description: String,
    /// Unit amount in minor units.
    pub amount: i64,
    /// Quantity.
    pub quantity: u32,
}

/// Request body for `POST /create-checkout-session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub items: Vec<SessionLineItem>,
    pub customer_email: String,
    pub order_id: String,
}

/// Response body: the hosted page to redirect the shopper to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub url: String,
}

/// Derive session line items 1:1 from the cart.
///
/// Names carry the size label so the payment page distinguishes package
/// sizes of the same product.
pub fn session_line_items(cart: &Cart) -> Vec<SessionLineItem> {
    cart.items()
        .iter()
        .map(|line| SessionLineItem {
            name: format!("{} ({})", line.product.short_name, line.size),
            description: line.product.description.clone(),
            amount: to_minor_units(line.unit_price),
            quantity: line.quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eleora_commerce::cart::LineItem;
    use eleora_commerce::catalog::{Product, SizePrices, SizeVariant};
    use eleora_commerce::ids::ProductId;

    fn product(id: &str) -> Product {
        let mut p = Product::new(
            ProductId::new(id),
            "Wild Forest Honey",
            "Honey",
            SizePrices {
                g50: 80.0,
                g100: 150.0,
                g200: 280.0,
                g500: 650.0,
            },
        );
        p.description = "Raw single-origin honey".to_string();
        p
    }

    #[test]
    fn test_line_items_map_one_to_one() {
        let mut cart = Cart::new();
        cart.add(LineItem::new(product("7"), SizeVariant::G100, 2, 150.0));
        cart.add(LineItem::new(product("8"), SizeVariant::G500, 1, 649.99));

        let items = session_line_items(&cart);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Honey (100g)");
        assert_eq!(items[0].amount, 15000);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].amount, 64999);
    }

    #[test]
    fn test_empty_cart_has_no_items() {
        assert!(session_line_items(&Cart::new()).is_empty());
    }

    #[test]
    fn test_request_wire_shape() {
        let request = CreateSessionRequest {
            items: vec![SessionLineItem {
                name: "Honey (100g)".to_string(),
                description: String::new(),
                amount: 15000,
                quantity: 2,
            }],
            customer_email: "asha@example.com".to_string(),
            order_id: "a3f9".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["customerEmail"], "asha@example.com");
        assert_eq!(json["orderId"], "a3f9");
        assert_eq!(json["items"][0]["amount"], 15000);
    }

    #[test]
    fn test_response_wire_shape() {
        let response: CreateSessionResponse = serde_json::from_str(
            r#"{"sessionId": "cs_123", "url": "https://pay.example/cs_123"}"#,
        )
        .unwrap();
        assert_eq!(response.session_id, "cs_123");
        assert_eq!(response.url, "https://pay.example/cs_123");
    }
}
