//! Newtype identifiers.
//!
//! Keeping ids as newtypes prevents mixing a product id up with a quantity or
//! an order number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a product in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a product id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw id value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier assigned to a placed order by the submission backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create an order id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
        assert_eq!(format!("{}", id), "7");
        assert_eq!(ProductId::from(7), id);
    }

    #[test]
    fn test_order_id() {
        let id = OrderId::new("ORD-1712345678");
        assert_eq!(id.as_str(), "ORD-1712345678");
        assert_eq!(format!("{}", id), "ORD-1712345678");
    }
}
