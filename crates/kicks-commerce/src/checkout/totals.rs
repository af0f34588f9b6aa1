//! Order totals.

use crate::cart::CartState;
use crate::config::CheckoutConfig;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Price breakdown for an order: subtotal, flat shipping, tax on the
/// subtotal, and the resulting grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub grand_total: Money,
}

impl OrderTotals {
    /// Compute totals for the current cart under the given configuration.
    /// Tax is rounded to the cent before entering the grand total.
    pub fn compute(cart: &CartState, config: &CheckoutConfig) -> Self {
        let subtotal = cart.total();
        let shipping = config.shipping_fee;
        let tax = subtotal.percentage(config.tax_rate);
        Self {
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{reduce, CartAction};
    use crate::catalog::{Product, ProductCategory};
    use crate::ids::ProductId;

    #[test]
    fn test_two_pairs_of_sneakers() {
        // $89.99 x 2 -> subtotal $179.98, shipping $9.99, tax $14.40
        // (8% = $14.3984 rounded), total $204.37.
        let product = Product::new(
            ProductId::new(1),
            "Air Max Pro",
            Money::from_decimal(89.99),
            ProductCategory::Discount,
        );
        let mut cart = CartState::default();
        cart = reduce(cart, CartAction::AddItem(product.clone()));
        cart = reduce(cart, CartAction::AddItem(product));

        let totals = OrderTotals::compute(&cart, &CheckoutConfig::default());
        assert_eq!(totals.subtotal, Money::from_cents(17998));
        assert_eq!(totals.shipping, Money::from_cents(999));
        assert_eq!(totals.tax, Money::from_cents(1440));
        assert_eq!(totals.grand_total, Money::from_cents(20437));
        assert_eq!(totals.grand_total.display(), "$204.37");
    }

    #[test]
    fn test_configured_rates() {
        let product = Product::new(
            ProductId::new(1),
            "Urban Flex",
            Money::from_cents(10000),
            ProductCategory::Regular,
        );
        let cart = reduce(CartState::default(), CartAction::AddItem(product));

        let config = CheckoutConfig {
            shipping_fee: Money::from_cents(500),
            tax_rate: 5.0,
            ..CheckoutConfig::default()
        };
        let totals = OrderTotals::compute(&cart, &config);
        assert_eq!(totals.tax, Money::from_cents(500));
        assert_eq!(totals.grand_total, Money::from_cents(11000));
    }
}
