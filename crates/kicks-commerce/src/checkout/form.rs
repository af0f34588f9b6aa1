//! Checkout form data.

use serde::{Deserialize, Serialize};

/// Contact and payment fields collected during checkout.
///
/// Owned by the active [`CheckoutSession`](crate::checkout::CheckoutSession)
/// and discarded when the session completes or is dismissed; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    // Contact
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    /// Region code, e.g. "ny". Must be one of the supported codes.
    pub state: String,
    pub zip_code: String,

    // Payment
    /// Card number as four space-separated groups of four digits.
    pub card_number: String,
    /// Expiry as MM/YY.
    pub expiry_date: String,
    /// 3-4 digit card verification value.
    pub cvv: String,
}

impl CheckoutForm {
    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// "First Last" for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut form = CheckoutForm {
            email: "jo@example.com".into(),
            cvv: "123".into(),
            ..CheckoutForm::default()
        };
        form.reset();
        assert_eq!(form, CheckoutForm::default());
    }

    #[test]
    fn test_full_name() {
        let form = CheckoutForm {
            first_name: "Jordan".into(),
            last_name: "Avery".into(),
            ..CheckoutForm::default()
        };
        assert_eq!(form.full_name(), "Jordan Avery");
    }
}
