//! The cart store.
//!
//! An explicitly owned store object replacing the original's module-level
//! singleton: callers inject it, dispatch actions into it, and subscribe to
//! state changes.

use crate::cart::{reduce, CartAction, CartState};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::notify::{NoticeKind, Notifier, NullNotifier};
use std::sync::Arc;

/// Handle for dropping a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&CartState) + Send>;

/// Owns the cart state and applies the reducer on dispatch.
///
/// Every dispatch runs synchronously to completion: the reducer is applied,
/// then each subscriber observes the new state. The convenience methods
/// mirror the storefront's cart controls and raise the matching notices;
/// [`CartStore::dispatch`] itself is silent.
pub struct CartStore {
    state: CartState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Create an empty store reporting notices to `notifier`.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: CartState::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
            notifier,
        }
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&mut self, action: CartAction) {
        tracing::debug!(action = action.kind(), "cart dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        tracing::debug!(
            items = self.state.unique_item_count(),
            count = self.state.item_count(),
            total = %self.state.total(),
            "cart updated"
        );
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Observe every state change. The callback runs after each dispatch
    /// with the new state.
    pub fn subscribe(&mut self, subscriber: impl Fn(&CartState) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Drop a subscription. Returns false when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() < before
    }

    /// Add one unit of a product.
    pub fn add_item(&mut self, product: &Product) {
        let title = product.title.clone();
        self.dispatch(CartAction::AddItem(product.clone()));
        self.notifier
            .notify(NoticeKind::Success, &format!("{title} Added to cart!"));
    }

    /// Set a product's quantity; zero or below removes it.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity { id, quantity });
    }

    /// Remove a product from the cart.
    pub fn remove_item(&mut self, id: ProductId) {
        self.dispatch(CartAction::RemoveItem(id));
        self.notifier
            .notify(NoticeKind::Success, "Item removed successfully");
    }

    /// Empty the cart at the user's request.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
        self.notifier.notify(
            NoticeKind::Info,
            "Cart cleared. All items have been removed from your cart.",
        );
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Arc::new(NullNotifier))
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCategory;
    use crate::money::Money;
    use crate::notify::MemoryNotifier;
    use std::sync::Mutex;

    fn product(id: u32, price_cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::from_cents(price_cents),
            ProductCategory::Regular,
        )
    }

    #[test]
    fn test_subscribers_observe_every_dispatch() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = CartStore::default();
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| {
            sink.lock().unwrap().push(state.item_count());
        });

        store.add_item(&product(1, 8999));
        store.add_item(&product(1, 8999));
        store.clear();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn test_unsubscribe_stops_updates() {
        let seen = Arc::new(Mutex::new(0u32));
        let mut store = CartStore::default();
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |_| {
            *sink.lock().unwrap() += 1;
        });

        store.add_item(&product(1, 8999));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_item(&product(1, 8999));

        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_notices_for_cart_controls() {
        let notifier = Arc::new(MemoryNotifier::new());
        let mut store = CartStore::new(notifier.clone());

        store.add_item(&product(1, 8999));
        store.remove_item(ProductId::new(1));
        store.clear();

        let notices = notifier.notices();
        assert_eq!(notices.len(), 3);
        assert_eq!(
            notices[0],
            (NoticeKind::Success, "Product 1 Added to cart!".into())
        );
        assert_eq!(
            notices[1],
            (NoticeKind::Success, "Item removed successfully".into())
        );
        assert_eq!(notices[2].0, NoticeKind::Info);
    }

    #[test]
    fn test_raw_dispatch_is_silent() {
        let notifier = Arc::new(MemoryNotifier::new());
        let mut store = CartStore::new(notifier.clone());

        store.dispatch(CartAction::AddItem(product(1, 8999)));
        store.dispatch(CartAction::Clear);

        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_update_quantity_through_store() {
        let mut store = CartStore::default();
        store.add_item(&product(1, 8999));
        store.update_quantity(ProductId::new(1), 4);
        assert_eq!(store.state().item_count(), 4);

        store.update_quantity(ProductId::new(1), 0);
        assert!(store.state().is_empty());
    }
}
