//! Cart items and cart state.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line in the cart. One entry per product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product identity; unique within the cart.
    pub id: ProductId,
    /// Product title, denormalized for display.
    pub title: String,
    /// Unit price at the time the item was added.
    pub price: Money,
    /// Product image URI, if any.
    pub image: Option<String>,
    /// Units of this product in the cart; never below 1.
    pub quantity: i64,
}

impl CartItem {
    /// Seed a cart item from a catalog product, with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// The cart's item collection.
///
/// Item count and total are derived from the collection on every read, so
/// they cannot go stale; they are not independently settable. The per-id
/// uniqueness and quantity >= 1 invariants are maintained by the reducer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartState {
    pub(crate) items: Vec<CartItem>,
}

impl CartState {
    /// Items currently in the cart.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The item for a product id, if present.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Total units across all items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of price times quantity over all items.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
