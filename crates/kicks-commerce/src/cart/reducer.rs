//! Cart actions and the pure reducer.

use crate::cart::{CartItem, CartState};
use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Tagged cart mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product. Increments the quantity when the product
    /// is already in the cart.
    AddItem(Product),
    /// Remove a product entirely. No-op when absent.
    RemoveItem(ProductId),
    /// Set (not increment) a product's quantity. Zero or negative removes
    /// the item. No-op when absent.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    /// Stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::Clear => "clear",
        }
    }
}

/// Apply an action to a cart state.
///
/// Pure: the next state is a function of the inputs alone. Every action
/// leaves the derived totals consistent with the item collection, and none
/// of them can fail.
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem(product) => {
            if let Some(item) = state.items.iter_mut().find(|i| i.id == product.id) {
                item.quantity += 1;
            } else {
                state.items.push(CartItem::from_product(&product));
            }
        }
        CartAction::RemoveItem(id) => {
            state.items.retain(|i| i.id != id);
        }
        CartAction::UpdateQuantity { id, quantity } => {
            if quantity <= 0 {
                state.items.retain(|i| i.id != id);
            } else if let Some(item) = state.items.iter_mut().find(|i| i.id == id) {
                item.quantity = quantity;
            }
        }
        CartAction::Clear => {
            state.items.clear();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCategory;
    use crate::money::Money;

    fn product(id: u32, price_cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::from_cents(price_cents),
            ProductCategory::Regular,
        )
    }

    fn apply(state: CartState, actions: impl IntoIterator<Item = CartAction>) -> CartState {
        actions.into_iter().fold(state, reduce)
    }

    #[test]
    fn test_repeated_add_keeps_one_entry() {
        let adds = std::iter::repeat_with(|| CartAction::AddItem(product(1, 8999))).take(4);
        let state = apply(CartState::default(), adds);

        assert_eq!(state.unique_item_count(), 1);
        assert_eq!(state.item_count(), 4);
    }

    #[test]
    fn test_add_two_products() {
        let state = apply(
            CartState::default(),
            [
                CartAction::AddItem(product(1, 8999)),
                CartAction::AddItem(product(2, 5999)),
                CartAction::AddItem(product(1, 8999)),
            ],
        );
        assert_eq!(state.unique_item_count(), 2);
        assert_eq!(state.item_count(), 3);
        assert_eq!(state.total(), Money::from_cents(2 * 8999 + 5999));
    }

    #[test]
    fn test_update_quantity_sets_not_increments() {
        let state = apply(
            CartState::default(),
            [
                CartAction::AddItem(product(1, 8999)),
                CartAction::UpdateQuantity {
                    id: ProductId::new(1),
                    quantity: 5,
                },
            ],
        );
        assert_eq!(state.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for quantity in [0, -3] {
            let state = apply(
                CartState::default(),
                [
                    CartAction::AddItem(product(1, 8999)),
                    CartAction::UpdateQuantity {
                        id: ProductId::new(1),
                        quantity,
                    },
                ],
            );
            assert!(state.is_empty());
        }
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let state = apply(
            CartState::default(),
            [
                CartAction::AddItem(product(1, 8999)),
                CartAction::UpdateQuantity {
                    id: ProductId::new(9),
                    quantity: 3,
                },
            ],
        );
        assert_eq!(state.item_count(), 1);
    }

    #[test]
    fn test_remove_item() {
        let state = apply(
            CartState::default(),
            [
                CartAction::AddItem(product(1, 8999)),
                CartAction::AddItem(product(2, 5999)),
                CartAction::RemoveItem(ProductId::new(1)),
                CartAction::RemoveItem(ProductId::new(42)), // absent: no-op
            ],
        );
        assert_eq!(state.unique_item_count(), 1);
        assert!(state.get(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_clear() {
        let state = apply(
            CartState::default(),
            [
                CartAction::AddItem(product(1, 8999)),
                CartAction::AddItem(product(2, 5999)),
                CartAction::Clear,
            ],
        );
        assert!(state.is_empty());
        assert_eq!(state.item_count(), 0);
        assert_eq!(state.total(), Money::ZERO);
    }

    #[test]
    fn test_totals_consistent_after_every_action() {
        let actions = [
            CartAction::AddItem(product(1, 8999)),
            CartAction::AddItem(product(2, 11099)),
            CartAction::UpdateQuantity {
                id: ProductId::new(2),
                quantity: 3,
            },
            CartAction::RemoveItem(ProductId::new(1)),
            CartAction::Clear,
        ];
        let mut state = CartState::default();
        for action in actions {
            state = reduce(state, action);
            let expected: Money = state.items().iter().map(|i| i.price * i.quantity).sum();
            assert_eq!(state.total(), expected);
            let count: i64 = state.items().iter().map(|i| i.quantity).sum();
            assert_eq!(state.item_count(), count);
        }
    }
}
