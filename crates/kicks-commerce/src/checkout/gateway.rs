//! Order submission boundary.

use crate::cart::CartItem;
use crate::checkout::{CheckoutForm, OrderTotals};
use crate::error::GatewayError;
use crate::ids::OrderId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Everything the backend needs to place an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Cart items at submission time.
    pub items: Vec<CartItem>,
    /// Price breakdown; `totals.grand_total` is the amount to charge.
    pub totals: OrderTotals,
    /// Validated customer contact and payment data.
    pub customer: CheckoutForm,
}

/// Successful submission result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderReceipt {
    /// Identifier assigned by the backend.
    pub order_id: OrderId,
}

/// The hosted order backend, seen from the checkout flow: one asynchronous
/// call that either yields a receipt or fails. Failures never mutate cart
/// state; retrying is a new call.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderReceipt, GatewayError>;
}

/// In-process gateway for demos and tests.
///
/// Resolves immediately with an `ORD-<millis>` receipt, counts calls, and
/// can be scripted to decline.
#[derive(Debug, Default)]
pub struct MockGateway {
    calls: AtomicU64,
    decline: AtomicBool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that declines every order.
    pub fn declining() -> Self {
        let gateway = Self::new();
        gateway.set_decline(true);
        gateway
    }

    /// Script whether subsequent orders are declined.
    pub fn set_decline(&self, decline: bool) {
        self.decline.store(decline, Ordering::SeqCst);
    }

    /// Number of `place_order` calls so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderGateway for MockGateway {
    async fn place_order(&self, _request: &OrderRequest) -> Result<OrderReceipt, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.decline.load(Ordering::SeqCst) {
            return Err(GatewayError::Declined("payment was declined".into()));
        }
        Ok(OrderReceipt {
            order_id: OrderId::new(format!("ORD-{}", current_millis())),
        })
    }
}

fn current_millis() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn request() -> OrderRequest {
        OrderRequest {
            items: Vec::new(),
            totals: OrderTotals {
                subtotal: crate::money::Money::ZERO,
                shipping: crate::money::Money::ZERO,
                tax: crate::money::Money::ZERO,
                grand_total: crate::money::Money::ZERO,
            },
            customer: CheckoutForm::default(),
        }
    }

    #[test]
    fn test_mock_gateway_issues_receipts() {
        let gateway = MockGateway::new();
        let receipt = block_on(gateway.place_order(&request())).unwrap();
        assert!(receipt.order_id.as_str().starts_with("ORD-"));
        assert_eq!(gateway.calls(), 1);
    }

    #[test]
    fn test_order_request_wire_shape() {
        // The backend consumes {items, totals, customer}; keep the JSON keys
        // stable.
        let value = serde_json::to_value(request()).unwrap();
        assert!(value.get("items").is_some());
        assert!(value["totals"].get("grand_total").is_some());
        assert!(value["customer"].get("zip_code").is_some());
    }

    #[test]
    fn test_mock_gateway_declines_when_scripted() {
        let gateway = MockGateway::declining();
        let err = block_on(gateway.place_order(&request())).unwrap_err();
        assert!(matches!(err, GatewayError::Declined(_)));

        gateway.set_decline(false);
        assert!(block_on(gateway.place_order(&request())).is_ok());
        assert_eq!(gateway.calls(), 2);
    }
}
