//! Shopping cart module.
//!
//! A pure reducer over tagged actions, wrapped by a store that owns the
//! state, notifies subscribers, and raises user-facing notices.

mod item;
mod reducer;
mod store;

pub use item::{CartItem, CartState};
pub use reducer::{reduce, CartAction};
pub use store::{CartStore, SubscriptionId};
