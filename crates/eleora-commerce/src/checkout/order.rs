//! Order types.

use crate::cart::Cart;
use crate::catalog::SizeVariant;
use crate::checkout::CustomerDetails;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Hosted payment page (UPI, cards, net banking).
    #[default]
    Online,
    /// Cash on delivery.
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Online => "online",
            PaymentMethod::Cod => "cod",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "online" | "upi" => Some(PaymentMethod::Online),
            "cod" => Some(PaymentMethod::Cod),
            _ => None,
        }
    }

    /// Check if this method settles outside the payment gateway.
    pub fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cod)
    }
}

/// Payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Awaiting gateway confirmation.
    #[default]
    Pending,
    /// Payment captured.
    Paid,
    /// Collect on delivery.
    Cod,
    /// Gateway reported failure.
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Cod => "cod",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// A line item snapshot in an order.
///
/// Independent of the cart and catalog after creation: later edits to
/// either never alter a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Product ID at time of order.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub product_name: String,
    /// Package size.
    pub size: SizeVariant,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price at time of order.
    pub unit_price: f64,
    /// Total for this line.
    pub total_price: f64,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Customer user ID (None for guest orders).
    pub user_id: Option<String>,
    /// Contact and shipping details as entered at checkout.
    pub customer: CustomerDetails,
    /// Rendered shipping address.
    pub shipping_address: String,
    /// Total amount charged.
    pub total_amount: f64,
    /// Order status.
    pub status: OrderStatus,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Free-form notes (e.g., gateway payment reference).
    pub notes: Option<String>,
    /// Item snapshots.
    pub items: Vec<OrderLineItem>,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Build an order from the cart at the checkout boundary.
    ///
    /// Rejects an empty cart, incomplete customer details, and any line
    /// whose captured unit price is not a positive finite number. The
    /// catalog's fail-soft price of 0 is fine on a product page but must
    /// never become a free order.
    pub fn from_cart(
        cart: &Cart,
        customer: CustomerDetails,
        user_id: Option<String>,
        payment_method: PaymentMethod,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if !customer.is_complete() {
            return Err(CommerceError::ValidationError(
                "incomplete shipping details".to_string(),
            ));
        }
        for line in cart.items() {
            if !(line.unit_price.is_finite() && line.unit_price > 0.0) {
                return Err(CommerceError::ZeroPricedItem {
                    name: line.product.short_name.clone(),
                    size: line.size.as_str().to_string(),
                });
            }
        }

        let items = cart
            .items()
            .iter()
            .map(|line| OrderLineItem {
                product_id: line.product.id.clone(),
                product_name: line.product.short_name.clone(),
                size: line.size,
                quantity: line.quantity,
                unit_price: line.unit_price,
                total_price: line.line_total(),
            })
            .collect();

        let payment_status = if payment_method.is_cash() {
            PaymentStatus::Cod
        } else {
            PaymentStatus::Pending
        };

        let shipping_address = customer.shipping_address();
        Ok(Self {
            id: OrderId::generate(),
            user_id,
            customer,
            shipping_address,
            total_amount: cart.total(),
            status: OrderStatus::Pending,
            payment_method,
            payment_status,
            notes: None,
            items,
            created_at: current_timestamp(),
        })
    }

    /// Get total item count.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the order is paid (or payable on delivery).
    pub fn is_paid(&self) -> bool {
        matches!(self.payment_status, PaymentStatus::Paid)
    }

    /// Update order status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Update payment status.
    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status;
    }

    /// Cancel the order, if it is still cancellable.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        true
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineItem;
    use crate::catalog::{Product, SizePrices};

    fn product(id: &str) -> Product {
        Product::new(
            ProductId::new(id),
            "Wild Forest Honey",
            "Honey",
            SizePrices {
                g50: 80.0,
                g100: 150.0,
                g200: 280.0,
                g500: 650.0,
            },
        )
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            full_name: "Asha Rao".to_string(),
            mobile: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            country: "India".to_string(),
        }
    }

    fn populated_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(LineItem::new(product("7"), SizeVariant::G100, 2, 150.0));
        cart.add(LineItem::new(product("8"), SizeVariant::G500, 1, 650.0));
        cart
    }

    #[test]
    fn test_from_cart_snapshots_lines() {
        let cart = populated_cart();
        let order =
            Order::from_cart(&cart, customer(), None, PaymentMethod::Cod).unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.total_amount, 950.0);
        assert_eq!(order.items[0].total_price, 300.0);
        assert_eq!(order.payment_status, PaymentStatus::Cod);
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.user_id.is_none());
    }

    #[test]
    fn test_from_cart_rejects_empty() {
        let cart = Cart::new();
        let err = Order::from_cart(&cart, customer(), None, PaymentMethod::Cod).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_from_cart_rejects_zero_price() {
        let mut cart = Cart::new();
        cart.add(LineItem::new(product("7"), SizeVariant::G100, 1, 0.0));

        let err = Order::from_cart(&cart, customer(), None, PaymentMethod::Cod).unwrap_err();
        assert!(matches!(err, CommerceError::ZeroPricedItem { .. }));
    }

    #[test]
    fn test_from_cart_rejects_incomplete_customer() {
        let cart = populated_cart();
        let mut incomplete = customer();
        incomplete.email.clear();

        let err = Order::from_cart(&cart, incomplete, None, PaymentMethod::Cod).unwrap_err();
        assert!(matches!(err, CommerceError::ValidationError(_)));
    }

    #[test]
    fn test_snapshot_is_independent_of_cart() {
        let mut cart = populated_cart();
        let order =
            Order::from_cart(&cart, customer(), None, PaymentMethod::Online).unwrap();

        cart.update_quantity(&ProductId::new("7"), SizeVariant::G100, 9);
        cart.clear();

        assert_eq!(order.item_count(), 3);
        assert_eq!(order.total_amount, 950.0);
    }

    #[test]
    fn test_online_order_starts_pending() {
        let cart = populated_cart();
        let order =
            Order::from_cart(&cart, customer(), Some("user-1".to_string()), PaymentMethod::Online)
                .unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert!(!order.is_paid());
    }

    #[test]
    fn test_status_transitions() {
        let cart = populated_cart();
        let mut order =
            Order::from_cart(&cart, customer(), None, PaymentMethod::Cod).unwrap();

        assert!(order.cancel());
        assert_eq!(order.status, OrderStatus::Cancelled);
        // Terminal orders cannot be cancelled again.
        assert!(!order.cancel());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::from_str("refunded"), None);
    }
}
