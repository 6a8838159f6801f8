//! Order submission orchestration for the Eleora storefront.
//!
//! Ties the cart engine, the order store, and the payment-session
//! collaborator together under one rule: a downstream failure never
//! mutates the cart. The cart empties only on explicit success: a
//! cash-on-delivery order landing in the store, or an online payment
//! coming back confirmed.

use eleora_commerce::cart::Cart;
use eleora_commerce::checkout::{CustomerDetails, Order, PaymentMethod, PaymentStatus};
use eleora_commerce::ids::OrderId;
use eleora_commerce::CommerceError;
use eleora_payments::{session_line_items, CreateSessionRequest, PaymentError, SessionClient};
use eleora_store::{CartSlot, OrderStore, StoreError};
use thiserror::Error;
use tracing::info;

/// Errors surfaced by checkout orchestration.
///
/// All of them leave the cart exactly as it was; callers show a retry
/// affordance and keep the shopper on the checkout page.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error("Order could not be saved: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("Order not found: {0}")]
    OrderNotFound(String),
}

/// Checkout service over the order store and the payment-session client.
pub struct Checkout<'a> {
    orders: &'a dyn OrderStore,
    sessions: &'a dyn SessionClient,
}

impl<'a> Checkout<'a> {
    pub fn new(orders: &'a dyn OrderStore, sessions: &'a dyn SessionClient) -> Self {
        Self { orders, sessions }
    }

    /// Place a cash-on-delivery order.
    ///
    /// The cart is cleared and re-persisted only after the order is safely
    /// in the store.
    pub fn place_cod_order(
        &self,
        cart: &mut Cart,
        slot: &CartSlot,
        customer: CustomerDetails,
        user_id: Option<String>,
    ) -> Result<Order, CheckoutError> {
        let order = Order::from_cart(cart, customer, user_id, PaymentMethod::Cod)?;
        self.orders.insert(&order)?;

        cart.clear();
        slot.save(cart)?;
        info!(order = %order.id, total = order.total_amount, "placed COD order");
        Ok(order)
    }

    /// Start an online payment: place a pending order and create a
    /// payment session for it.
    ///
    /// Returns the order and the hosted payment page URL to redirect the
    /// shopper to. The cart is deliberately left untouched; it empties in
    /// [`complete_online_payment`](Checkout::complete_online_payment) once
    /// the gateway confirms, and a failure here (store or session server)
    /// leaves both cart and slot as they were.
    pub async fn begin_online_payment(
        &self,
        cart: &Cart,
        customer: CustomerDetails,
        user_id: Option<String>,
    ) -> Result<(Order, String), CheckoutError> {
        let email = customer.email.clone();
        let order = Order::from_cart(cart, customer, user_id, PaymentMethod::Online)?;
        self.orders.insert(&order)?;

        let request = CreateSessionRequest {
            items: session_line_items(cart),
            customer_email: email,
            order_id: order.id.to_string(),
        };
        let session = self.sessions.create_session(&request).await?;

        info!(order = %order.id, session = %session.session_id, "created payment session");
        Ok((order, session.url))
    }

    /// Record a confirmed online payment and empty the cart.
    pub fn complete_online_payment(
        &self,
        order_id: &OrderId,
        cart: &mut Cart,
        slot: &CartSlot,
    ) -> Result<Order, CheckoutError> {
        let order = self
            .orders
            .get(order_id)?
            .ok_or_else(|| CheckoutError::OrderNotFound(order_id.to_string()))?;
        self.orders
            .set_payment_status(order_id, PaymentStatus::Paid)?;

        cart.clear();
        slot.save(cart)?;
        info!(order = %order_id, "online payment confirmed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use eleora_commerce::cart::LineItem;
    use eleora_commerce::catalog::{Product, SizePrices, SizeVariant};
    use eleora_commerce::checkout::OrderStatus;
    use eleora_commerce::ids::ProductId;
    use eleora_payments::CreateSessionResponse;
    use eleora_store::{JsonOrderStore, Store};
    use std::sync::Arc;

    /// Stub session client: answers with a fixed URL, or refuses.
    struct StubSessions {
        fail: bool,
    }

    #[async_trait]
    impl SessionClient for StubSessions {
        async fn create_session(
            &self,
            request: &CreateSessionRequest,
        ) -> Result<CreateSessionResponse, PaymentError> {
            if self.fail {
                return Err(PaymentError::Rejected {
                    status: 502,
                    body: "gateway unavailable".to_string(),
                });
            }
            Ok(CreateSessionResponse {
                session_id: "cs_test".to_string(),
                url: format!("https://pay.example/{}", request.order_id),
            })
        }
    }

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

    struct Fixture {
        orders: JsonOrderStore,
        slot: CartSlot,
    }

    impl Fixture {
        fn new() -> Self {
            let store = Arc::new(Store::memory());
            Self {
                orders: JsonOrderStore::new(store.clone()),
                slot: CartSlot::new(store),
            }
        }

        fn populated_cart(&self) -> Cart {
            let mut cart = Cart::new();
            cart.add(LineItem::new(product("7"), SizeVariant::G100, 2, 150.0));
            cart.add(LineItem::new(product("8"), SizeVariant::G500, 1, 650.0));
            self.slot.save(&cart).unwrap();
            cart
        }
    }

    #[test]
    fn test_cod_order_clears_cart_and_slot() {
        let fx = Fixture::new();
        let mut cart = fx.populated_cart();
        let sessions = StubSessions { fail: false };
        let checkout = Checkout::new(&fx.orders, &sessions);

        let order = checkout
            .place_cod_order(&mut cart, &fx.slot, customer(), None)
            .unwrap();

        assert_eq!(order.total_amount, 950.0);
        assert_eq!(order.payment_status, PaymentStatus::Cod);
        assert!(cart.is_empty());
        assert!(fx.slot.load().is_empty());
        assert!(fx.orders.get(&order.id).unwrap().is_some());
    }

    #[test]
    fn test_cod_rejects_empty_cart() {
        let fx = Fixture::new();
        let mut cart = Cart::new();
        let sessions = StubSessions { fail: false };
        let checkout = Checkout::new(&fx.orders, &sessions);

        let err = checkout
            .place_cod_order(&mut cart, &fx.slot, customer(), None)
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Commerce(CommerceError::EmptyCart)
        ));
        assert!(fx.orders.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_online_payment_returns_redirect_and_keeps_cart() {
        let fx = Fixture::new();
        let cart = fx.populated_cart();
        let sessions = StubSessions { fail: false };
        let checkout = Checkout::new(&fx.orders, &sessions);

        let (order, url) = checkout
            .begin_online_payment(&cart, customer(), Some("user-1".to_string()))
            .await
            .unwrap();

        assert_eq!(url, format!("https://pay.example/{}", order.id));
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        // The shopper may still abandon the payment page: cart stays put.
        assert_eq!(cart.count(), 3);
        assert_eq!(fx.slot.load().count(), 3);
    }

    #[tokio::test]
    async fn test_failed_session_leaves_cart_untouched() {
        let fx = Fixture::new();
        let cart = fx.populated_cart();
        let sessions = StubSessions { fail: true };
        let checkout = Checkout::new(&fx.orders, &sessions);

        let err = checkout
            .begin_online_payment(&cart, customer(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Payment(_)));
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), 950.0);
        assert_eq!(fx.slot.load().count(), 3);
    }

    #[tokio::test]
    async fn test_complete_online_payment() {
        let fx = Fixture::new();
        let mut cart = fx.populated_cart();
        let sessions = StubSessions { fail: false };
        let checkout = Checkout::new(&fx.orders, &sessions);

        let (order, _url) = checkout
            .begin_online_payment(&cart, customer(), None)
            .await
            .unwrap();

        checkout
            .complete_online_payment(&order.id, &mut cart, &fx.slot)
            .unwrap();

        assert!(cart.is_empty());
        assert!(fx.slot.load().is_empty());
        let stored = fx.orders.get(&order.id).unwrap().unwrap();
        assert_eq!(stored.payment_status, PaymentStatus::Paid);
        assert_eq!(stored.status, OrderStatus::Pending);
    }

    #[test]
    fn test_complete_unknown_order() {
        let fx = Fixture::new();
        let mut cart = fx.populated_cart();
        let sessions = StubSessions { fail: false };
        let checkout = Checkout::new(&fx.orders, &sessions);

        let err = checkout
            .complete_online_payment(&OrderId::new("missing"), &mut cart, &fx.slot)
            .unwrap_err();
        assert!(matches!(err, CheckoutError::OrderNotFound(_)));
        // Even here the cart survives.
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_zero_priced_line_cannot_checkout() {
        let fx = Fixture::new();
        let mut cart = Cart::new();
        cart.add(LineItem::new(product("7"), SizeVariant::G100, 1, 0.0));
        let sessions = StubSessions { fail: false };
        let checkout = Checkout::new(&fx.orders, &sessions);

        let err = checkout
            .place_cod_order(&mut cart, &fx.slot, customer(), None)
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Commerce(CommerceError::ZeroPricedItem { .. })
        ));
        assert_eq!(cart.count(), 1);
    }
}
