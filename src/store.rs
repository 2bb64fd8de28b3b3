//! Global Basket Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The checkout
//! steps see the store through [`StoreBasket`].

use booking_core::{BasketContext, BasketItem};
use leptos::prelude::*;
use reactive_stores::Store;

/// Basket state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BasketState {
    /// Lines in the basket
    pub items: Vec<BasketItem>,
    /// Donation pushed by the checkout donation step
    pub donation: f64,
}

impl BasketState {
    pub fn new(items: Vec<BasketItem>) -> Self {
        Self { items, donation: 0.0 }
    }
}

/// Type alias for the store
pub type BasketStore = Store<BasketState>;

/// Get the basket store from context
pub fn use_basket_store() -> BasketStore {
    expect_context::<BasketStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a line to the basket
pub fn store_add_item(store: &BasketStore, item: BasketItem) {
    store.items().write().push(item);
}

/// Remove a line from the basket by ID
pub fn store_remove_item(store: &BasketStore, item_id: &str) {
    store.items().write().retain(|item| item.id != item_id);
}

/// An ID not used by any line in the basket
pub fn store_next_line_id(store: &BasketStore, prefix: &str) -> String {
    let taken = store.items().with_untracked(|items| {
        items.iter().map(|item| item.id.clone()).collect::<Vec<_>>()
    });
    (1..)
        .map(|n| format!("{}-{}", prefix, n))
        .find(|id| !taken.contains(id))
        .unwrap_or_else(|| prefix.to_string())
}

/// Basket context handed to checkout steps
#[derive(Clone, Copy)]
pub struct StoreBasket(pub BasketStore);

impl BasketContext for StoreBasket {
    fn basket_items(&self) -> Vec<BasketItem> {
        self.0.items().get_untracked()
    }

    fn set_donation_amount(&self, amount: f64) {
        self.0.donation().set(amount);
    }
}
