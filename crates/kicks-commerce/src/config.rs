//! Checkout configuration.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable checkout behavior.
///
/// The shipping fee and tax rate are business settings, not constants; the
/// defaults match the storefront's launch values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Flat shipping fee added to every order.
    pub shipping_fee: Money,
    /// Sales tax rate, as a percentage of the subtotal.
    pub tax_rate: f64,
    /// Deadline for a single order submission attempt. The driving surface
    /// applies it around the gateway call; there is no automatic retry.
    pub submit_timeout: Duration,
    /// How long the confirmation screen stays up before the session resets.
    pub confirmation_hold: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_fee: Money::from_cents(999),
            tax_rate: 8.0,
            submit_timeout: Duration::from_secs(10),
            confirmation_hold: Duration::from_secs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CheckoutConfig::default();
        assert_eq!(config.shipping_fee, Money::from_cents(999));
        assert_eq!(config.tax_rate, 8.0);
        assert_eq!(config.submit_timeout, Duration::from_secs(10));
    }
}
