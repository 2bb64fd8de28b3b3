//! Property-based tests for basket totals and the donation slider
//!
//! Uses proptest to check the invariants the checkout relies on.

use std::rc::Rc;

use booking_core::donation::{DonationController, DonationMode, DonationPolicy, DonationType, DonationVariant};
use booking_core::{basket_total, format_money, parse_price, BasketItem, InMemoryBasket};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Money strings in whole pence, e.g. "£12.05"
fn money_strategy() -> impl Strategy<Value = String> {
    (0u32..100_000).prop_map(|pence| format!("£{}.{:02}", pence / 100, pence % 100))
}

/// Line items carrying a price, a cost, both or neither
fn item_strategy() -> impl Strategy<Value = BasketItem> {
    (
        "[a-z]{1,8}",
        prop::option::of(money_strategy()),
        prop::option::of(money_strategy()),
    )
        .prop_map(|(id, price, cost)| BasketItem { id, price, cost, ..Default::default() })
}

fn policy_strategy() -> impl Strategy<Value = DonationPolicy> {
    prop_oneof![Just(DonationPolicy::classic()), Just(DonationPolicy::revised())]
}

fn basket(items: Vec<BasketItem>) -> Rc<InMemoryBasket> {
    Rc::new(InMemoryBasket::new(items))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The total is the sum of each item's cost, falling back to its price
    #[test]
    fn total_is_sum_of_charges(items in prop::collection::vec(item_strategy(), 0..12)) {
        let expected: f64 = items
            .iter()
            .map(|item| parse_price(item.cost.as_deref().or(item.price.as_deref())))
            .sum();
        prop_assert!((basket_total(&items) - expected).abs() < 1e-6);
    }

    /// Reordering the basket never changes the total
    #[test]
    fn total_is_order_independent(items in prop::collection::vec(item_strategy(), 0..12)) {
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert!((basket_total(&items) - basket_total(&reversed)).abs() < 1e-6);
    }

    /// Formatting a parsed price gives the same string back
    #[test]
    fn money_strings_survive_parsing(money in money_strategy()) {
        prop_assert_eq!(format_money("£", parse_price(Some(&money))), money);
    }

    /// Any slider position inside the range charges that share of the total
    #[test]
    fn slider_amount_is_share_of_total(
        items in prop::collection::vec(item_strategy(), 0..6),
        position in 0.0f64..=20.0,
    ) {
        let policy = DonationPolicy::classic();
        let total = basket_total(&items);
        let basket = basket(items);
        let mut step = DonationController::new(policy, DonationVariant::Slider, Rc::clone(&basket));
        step.slide_to(position);

        prop_assert_eq!(step.mode(), DonationMode::Percentage(position));
        prop_assert_eq!(basket.donation_amount(), total * position / 100.0);
        if total == 0.0 {
            prop_assert_eq!(basket.donation_amount(), 0.0);
        }
    }

    /// Clearing the typed amount always returns the slider to its resting range
    #[test]
    fn clearing_typed_amount_restores_range(
        typed in "[0-9]{1,4}(\\.[0-9]{0,2})?",
        items in prop::collection::vec(item_strategy(), 0..6),
        policy in policy_strategy(),
    ) {
        let mut step = DonationController::new(policy, DonationVariant::Slider, basket(items));
        prop_assert!(step.type_fixed_amount(&typed));
        prop_assert!(step.type_fixed_amount(""));

        prop_assert_eq!(step.state().donation_type, DonationType::Percentage);
        prop_assert_eq!(step.state().dynamic_max, policy.default_ceiling);
        prop_assert!(step.state().last_percentage <= policy.default_ceiling);
    }

    /// The slider ceiling never passes the hard cap, whatever is typed
    #[test]
    fn typed_amount_never_exceeds_cap(
        typed in "[0-9]{1,6}",
        items in prop::collection::vec(item_strategy(), 1..6),
        policy in policy_strategy(),
    ) {
        let mut step = DonationController::new(policy, DonationVariant::Slider, basket(items));
        prop_assert!(step.type_fixed_amount(&typed));
        prop_assert!(step.state().dynamic_max <= 200.0);
        prop_assert!(step.state().last_percentage <= step.state().dynamic_max);
    }
}
