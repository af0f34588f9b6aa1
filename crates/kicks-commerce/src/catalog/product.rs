//! Product types.

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Storefront section a product is merchandised under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Marked-down products.
    Discount,
    /// New arrivals.
    Latest,
    /// Everything else.
    #[default]
    Regular,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Discount => "discount",
            ProductCategory::Latest => "latest",
            ProductCategory::Regular => "regular",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "discount" => Some(ProductCategory::Discount),
            "latest" => Some(ProductCategory::Latest),
            "regular" => Some(ProductCategory::Regular),
            _ => None,
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Brand name, when known.
    pub brand: Option<String>,
    /// Current selling price.
    pub price: Money,
    /// Pre-markdown price, for discounted products.
    pub original_price: Option<Money>,
    /// Average review rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Image URI, if an image has been uploaded.
    pub image: Option<String>,
    /// Merchandising badge, e.g. "NEW" or "44% OFF".
    pub badge: Option<String>,
    /// Section the product is listed under.
    pub category: ProductCategory,
}

impl Product {
    /// Create a product with no reviews, image, or markdown.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Money,
        category: ProductCategory,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            brand: None,
            price,
            original_price: None,
            rating: 0.0,
            reviews: 0,
            image: None,
            badge: None,
            category,
        }
    }

    /// Whether the product is currently marked down.
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|p| p > self.price)
    }
}

/// Payload for creating or updating a product from the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductDraft {
    pub title: String,
    pub price: Money,
    pub rating: f64,
    pub reviews: u32,
    pub image: Option<String>,
}

impl ProductDraft {
    /// Validate the draft. Issues are collected and reported together.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut issues = Vec::new();
        if self.title.trim().is_empty() {
            issues.push("Title is required");
        }
        if self.price <= Money::ZERO {
            issues.push("Price must be a positive number");
        }
        if !(0.0..=5.0).contains(&self.rating) {
            issues.push("Rating must be between 0 and 5");
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::InvalidDraft(issues.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [
            ProductCategory::Discount,
            ProductCategory::Latest,
            ProductCategory::Regular,
        ] {
            assert_eq!(ProductCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(ProductCategory::from_str("clearance"), None);
    }

    #[test]
    fn test_is_discounted() {
        let mut product = Product::new(
            ProductId::new(1),
            "Air Max Pro",
            Money::from_cents(8999),
            ProductCategory::Discount,
        );
        assert!(!product.is_discounted());
        product.original_price = Some(Money::from_cents(15999));
        assert!(product.is_discounted());
    }

    #[test]
    fn test_draft_validation() {
        let good = ProductDraft {
            title: "Court Classic".into(),
            price: Money::from_cents(6500),
            rating: 4.5,
            reviews: 12,
            image: None,
        };
        assert!(good.validate().is_ok());

        let bad = ProductDraft {
            title: "  ".into(),
            price: Money::ZERO,
            rating: 7.0,
            reviews: 0,
            image: None,
        };
        let err = bad.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Title is required"));
        assert!(message.contains("positive number"));
        assert!(message.contains("between 0 and 5"));
    }
}
