//! Donation Controller
//!
//! Owns the donation state for one checkout session. After every change it
//! re-derives the amount, pushes it into the basket and reports the step as
//! valid (the donation is optional, so it always is).

use async_trait::async_trait;
use tracing::{debug, info};

use super::mode::{DonationMode, DonationVariant};
use super::policy::DonationPolicy;
use super::state::DonationState;
use crate::basket::{basket_total, BasketContext};
use crate::checkout::CheckoutStep;
use crate::error::BookingResult;

type ValidationListener = Box<dyn Fn(bool)>;

pub struct DonationController<B: BasketContext> {
    policy: DonationPolicy,
    state: DonationState,
    basket: B,
    on_validation: Option<ValidationListener>,
}

impl<B: BasketContext> DonationController<B> {
    pub fn new(policy: DonationPolicy, variant: DonationVariant, basket: B) -> Self {
        let mut controller = Self {
            policy,
            state: DonationState::new(variant, &policy),
            basket,
            on_validation: None,
        };
        controller.recompute();
        controller
    }

    /// Receive the step's validation status after every recomputation
    pub fn with_validation_listener(mut self, listener: impl Fn(bool) + 'static) -> Self {
        self.on_validation = Some(Box::new(listener));
        self.recompute();
        self
    }

    pub fn state(&self) -> &DonationState {
        &self.state
    }

    pub fn policy(&self) -> &DonationPolicy {
        &self.policy
    }

    pub fn basket(&self) -> &B {
        &self.basket
    }

    pub fn basket_total(&self) -> f64 {
        basket_total(&self.basket.basket_items())
    }

    pub fn mode(&self) -> DonationMode {
        self.state.mode()
    }

    /// Current donation for the current basket
    pub fn amount(&self) -> f64 {
        self.state.amount(self.basket_total(), &self.policy)
    }

    /// Re-derive the amount and publish it. Call after the basket changes.
    pub fn recompute(&mut self) -> f64 {
        let amount = self.amount();
        debug!(amount, mode = self.mode().name(), "donation recomputed");
        self.basket.set_donation_amount(amount);
        self.report_validation(true);
        amount
    }

    /// Switch layout; all previous input is discarded
    pub fn set_variant(&mut self, variant: DonationVariant) {
        self.state.reset(variant, &self.policy);
        self.recompute();
    }

    pub fn slide_to(&mut self, value: f64) {
        self.state.slide_to(value, &self.policy);
        self.recompute();
    }

    pub fn show_custom_amount(&mut self) {
        self.state.show_custom_amount();
    }

    /// Returns `false` when the text was rejected
    pub fn type_fixed_amount(&mut self, text: &str) -> bool {
        let total = self.basket_total();
        let accepted = self.state.type_fixed_amount(text, total, &self.policy);
        if accepted {
            self.recompute();
        }
        accepted
    }

    pub fn select_preset(&mut self, amount: u32) {
        self.state.select_preset(amount);
        self.recompute();
    }

    pub fn select_smart_preset(&mut self, percent: u32) {
        self.state.select_smart_preset(percent);
        self.recompute();
    }

    pub fn select_card(&mut self, amount: u32) {
        self.state.select_card(amount);
        self.recompute();
    }

    pub fn clear_preset_selection(&mut self) {
        self.state.clear_preset_selection();
        self.recompute();
    }

    pub fn set_round_up(&mut self, on: bool) -> bool {
        let applied = self.state.set_round_up(on, &self.policy);
        if applied {
            self.recompute();
        }
        applied
    }
}

#[async_trait(?Send)]
impl<B: BasketContext> CheckoutStep for DonationController<B> {
    fn title(&self) -> &str {
        "Donation"
    }

    fn validate(&self) -> BookingResult<()> {
        Ok(())
    }

    fn commit(&mut self) {
        let amount = self.recompute();
        info!(amount, "donation committed");
    }

    fn report_validation(&self, valid: bool) {
        if let Some(listener) = &self.on_validation {
            listener(valid);
        }
    }
}
