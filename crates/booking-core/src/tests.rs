//! Checkout Integration Tests
//!
//! Drives the donation and additional information steps through the
//! orchestrator against an in-memory basket.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::basket::{BasketItem, InMemoryBasket, Participant};
    use crate::checkout::{AdditionalInfoStep, Checkout, CheckoutStep};
    use crate::donation::display::tooltip_label;
    use crate::donation::{DonationController, DonationMode, DonationPolicy, DonationVariant};
    use crate::product::{featured_product, ProductSelection};
    use crate::BookingError;

    fn seahorse_basket() -> Rc<InMemoryBasket> {
        let item = ProductSelection::default().to_basket_item(&featured_product(), "line-1");
        Rc::new(InMemoryBasket::new(vec![item]))
    }

    fn slider(basket: &Rc<InMemoryBasket>, policy: DonationPolicy) -> DonationController<Rc<InMemoryBasket>> {
        DonationController::new(policy, DonationVariant::Slider, Rc::clone(basket))
    }

    #[tokio::test]
    async fn test_default_percentage_on_monthly_cost() {
        let basket = seahorse_basket();
        let mut step = slider(&basket, DonationPolicy::classic());

        assert!(step.submit_form().await);
        assert_eq!(basket.donation_amount(), 6.4);
        assert_eq!(tooltip_label(step.state(), step.basket_total(), "£"), "10% (£6.40)");
    }

    #[tokio::test]
    async fn test_large_typed_amount_caps_slider() {
        let basket = Rc::new(InMemoryBasket::new(vec![
            BasketItem::new("m", "Swimming Membership").with_cost("£20.00"),
        ]));
        let mut step = slider(&basket, DonationPolicy::classic());

        assert!(step.type_fixed_amount("50"));
        assert_eq!(step.state().dynamic_max, 200.0);
        assert_eq!(step.state().last_percentage, 200.0);
        assert_eq!(tooltip_label(step.state(), step.basket_total(), "£"), "200%+ (£50.00)");
        assert!(step.submit_form().await);
        assert_eq!(basket.donation_amount(), 50.0);
    }

    #[tokio::test]
    async fn test_empty_basket_is_still_valid() {
        let basket = Rc::new(InMemoryBasket::default());
        for variant in DonationVariant::ALL {
            let mut step = DonationController::new(DonationPolicy::classic(), variant, Rc::clone(&basket));
            assert!(step.submit_form().await);
        }
        // a percentage of an empty basket is nothing
        let mut step = slider(&basket, DonationPolicy::classic());
        assert!(step.submit_form().await);
        assert_eq!(basket.donation_amount(), 0.0);
    }

    #[tokio::test]
    async fn test_submit_twice_is_idempotent() {
        let basket = seahorse_basket();
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reports);
        let mut step = slider(&basket, DonationPolicy::classic())
            .with_validation_listener(move |valid| sink.borrow_mut().push(valid));

        assert!(step.submit_form().await);
        let first = basket.donation_amount();
        assert!(step.submit_form().await);
        assert_eq!(basket.donation_amount(), first);
        assert!(reports.borrow().iter().all(|valid| *valid));
    }

    #[tokio::test]
    async fn test_slider_after_typed_amount_restores_default() {
        for (policy, expected) in [(DonationPolicy::classic(), 10.0), (DonationPolicy::revised(), 15.0)] {
            let basket = seahorse_basket();
            let mut step = slider(&basket, policy);
            assert!(step.type_fixed_amount("30"));
            assert_eq!(step.mode(), DonationMode::Fixed(30.0));

            step.slide_to(3.0);
            assert_eq!(step.mode(), DonationMode::Percentage(expected));
            assert!(step.state().fixed_amount.is_empty());
            assert!(step.submit_form().await);
            assert_eq!(basket.donation_amount(), 64.0 * expected / 100.0);
        }
    }

    fn basket_with_participant() -> Rc<InMemoryBasket> {
        let basket = seahorse_basket();
        basket.add_item(
            BasketItem::new("line-2", "Stage 1")
                .with_price("£12.00")
                .with_participant(Participant { id: 7, first_name: "Ella".into(), last_name: "Toone".into() }),
        );
        basket
    }

    #[tokio::test]
    async fn test_full_checkout() {
        let basket = basket_with_participant();
        let donation = DonationController::new(DonationPolicy::classic(), DonationVariant::Presets, Rc::clone(&basket));
        let mut additional = AdditionalInfoStep::new(Rc::clone(&basket));
        additional.set_questions_answered(7, true);

        let steps: Vec<Box<dyn CheckoutStep>> = vec![Box::new(donation), Box::new(additional)];
        let mut checkout = Checkout::new(steps);
        assert_eq!(checkout.flow().titles(), ["Donation", "Additional information"]);

        assert!(checkout.next().await.unwrap());
        assert_eq!(basket.donation_amount(), 10.0);
        assert!(checkout.next().await.unwrap());
        assert!(checkout.flow().is_complete());
    }

    #[tokio::test]
    async fn test_checkout_stops_on_missing_answers() {
        let basket = basket_with_participant();
        let donation = DonationController::new(DonationPolicy::classic(), DonationVariant::Slider, Rc::clone(&basket));
        let steps: Vec<Box<dyn CheckoutStep>> =
            vec![Box::new(donation), Box::new(AdditionalInfoStep::new(Rc::clone(&basket)))];
        let mut checkout = Checkout::new(steps);

        assert!(checkout.next().await.unwrap());
        assert!(!checkout.next().await.unwrap());
        assert_eq!(checkout.flow().current(), 1);
        assert!(!checkout.flow().is_valid(1));

        checkout.back();
        assert_eq!(checkout.flow().current_title(), Some("Donation"));
    }

    #[tokio::test]
    async fn test_checkout_past_the_end() {
        let basket = Rc::new(InMemoryBasket::default());
        let steps: Vec<Box<dyn CheckoutStep>> = vec![Box::new(slider(&basket, DonationPolicy::revised()))];
        let mut checkout = Checkout::new(steps);
        assert!(checkout.next().await.unwrap());
        assert!(checkout.flow().is_complete());
        assert!(matches!(checkout.next().await, Err(BookingError::UnknownStep(1))));
    }
}
