//! Basket
//!
//! Line items the shopper has picked, the narrow context the checkout steps
//! read from and write to, and the totals shown at checkout.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::price::parse_price;

/// Someone attending a booked lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
}

impl Participant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A purchasable line item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BasketItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    /// Per-session price, e.g. "£16.00"
    #[serde(default)]
    pub price: Option<String>,
    /// Unit the price is quoted in ("session")
    #[serde(default)]
    pub price_quantity: Option<String>,
    /// Monthly cost; wins over `price` when present
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub billing: Option<String>,
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl BasketItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), ..Default::default() }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    /// The string the total is computed from: monthly cost, else price
    pub fn charge(&self) -> Option<&str> {
        self.cost
            .as_deref()
            .filter(|c| !c.is_empty())
            .or(self.price.as_deref())
    }

    pub fn amount(&self) -> f64 {
        parse_price(self.charge())
    }
}

/// Sum of every item's monthly cost, or price when it has none
pub fn basket_total(items: &[BasketItem]) -> f64 {
    items.iter().map(BasketItem::amount).sum()
}

/// Participants across all items, first occurrence of each id kept
pub fn unique_participants(items: &[BasketItem]) -> Vec<Participant> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|item| item.participants.iter())
        .filter(|p| seen.insert(p.id))
        .cloned()
        .collect()
}

/// Shared basket state as seen by a checkout step.
///
/// The owner of the basket implements this; steps only read items and
/// write the donation through the single setter.
pub trait BasketContext {
    fn basket_items(&self) -> Vec<BasketItem>;

    fn set_donation_amount(&self, amount: f64);
}

impl<T: BasketContext + ?Sized> BasketContext for Rc<T> {
    fn basket_items(&self) -> Vec<BasketItem> {
        (**self).basket_items()
    }

    fn set_donation_amount(&self, amount: f64) {
        (**self).set_donation_amount(amount)
    }
}

/// Plain basket kept in memory
#[derive(Debug, Default)]
pub struct InMemoryBasket {
    items: RefCell<Vec<BasketItem>>,
    donation: Cell<f64>,
    donation_writes: Cell<usize>,
}

impl InMemoryBasket {
    pub fn new(items: Vec<BasketItem>) -> Self {
        Self { items: RefCell::new(items), ..Default::default() }
    }

    pub fn add_item(&self, item: BasketItem) {
        self.items.borrow_mut().push(item);
    }

    pub fn remove_item(&self, id: &str) {
        self.items.borrow_mut().retain(|item| item.id != id);
    }

    pub fn donation_amount(&self) -> f64 {
        self.donation.get()
    }

    /// How many times a step pushed a donation amount
    pub fn donation_writes(&self) -> usize {
        self.donation_writes.get()
    }
}

impl BasketContext for InMemoryBasket {
    fn basket_items(&self) -> Vec<BasketItem> {
        self.items.borrow().clone()
    }

    fn set_donation_amount(&self, amount: f64) {
        self.donation.set(amount);
        self.donation_writes.set(self.donation_writes.get() + 1);
    }
}

/// Figures for the checkout summary
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckoutTotals {
    pub subtotal: f64,
    pub donation: f64,
    pub total: f64,
}

impl CheckoutTotals {
    pub fn compute(items: &[BasketItem], donation: f64) -> Self {
        let subtotal = basket_total(items);
        let donation = donation.max(0.0);
        Self { subtotal, donation, total: subtotal + donation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: u32, first: &str) -> Participant {
        Participant { id, first_name: first.to_string(), last_name: "Toone".to_string() }
    }

    #[test]
    fn test_total_prefers_cost_over_price() {
        let items = vec![
            BasketItem::new("a", "Bubble the Seahorse").with_price("£16.00").with_cost("£64.00"),
            BasketItem::new("b", "Swimming Membership").with_cost("£20.00"),
            BasketItem::new("c", "Trial").with_price("£5.50"),
            BasketItem::new("d", "Free taster"),
        ];
        assert_eq!(basket_total(&items), 89.5);
    }

    #[test]
    fn test_empty_cost_falls_back_to_price() {
        let item = BasketItem::new("a", "Stage 1").with_price("£12.00").with_cost("");
        assert_eq!(item.amount(), 12.0);
    }

    #[test]
    fn test_unique_participants_keeps_first_occurrence() {
        let items = vec![
            BasketItem::new("a", "Stage 1")
                .with_participant(participant(1, "Jacob"))
                .with_participant(participant(2, "Ella")),
            BasketItem::new("b", "Stage 2")
                .with_participant(participant(2, "Ella"))
                .with_participant(participant(3, "Sam")),
        ];
        let unique = unique_participants(&items);
        let ids: Vec<u32> = unique.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(unique[0].full_name(), "Jacob Toone");
    }

    #[test]
    fn test_in_memory_basket_records_donation() {
        let basket = InMemoryBasket::new(vec![BasketItem::new("a", "Stage 1").with_price("£10")]);
        basket.set_donation_amount(1.5);
        assert_eq!(basket.donation_amount(), 1.5);
        assert_eq!(basket.donation_writes(), 1);
        basket.remove_item("a");
        assert!(basket.basket_items().is_empty());
    }

    #[test]
    fn test_checkout_totals() {
        let items = vec![BasketItem::new("a", "Stage 1").with_cost("£64.00")];
        let totals = CheckoutTotals::compute(&items, 6.4);
        assert_eq!(totals.subtotal, 64.0);
        assert!((totals.total - 70.4).abs() < 1e-9);
    }
}
