//! Donation State
//!
//! Everything the donation step remembers between interactions, plus the
//! pure transitions the input handlers apply to it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::mode::{DonationMode, DonationType, DonationVariant};
use super::policy::DonationPolicy;
use super::range::adjust_range;
use crate::price::{leading_number, parse_amount};

/// Typed amounts may only contain digits and one decimal point
static AMOUNT_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("valid amount pattern"));

/// Flat preset selected when the presets layout opens
const DEFAULT_PRESET: u32 = 10;

/// Card amount selected when the cards layout opens
const DEFAULT_CARD: &str = "10";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationState {
    pub variant: DonationVariant,
    pub donation_type: DonationType,
    /// Slider percentage while in percentage mode
    pub percentage: f64,
    /// Slider handle position mirrored from a typed amount
    pub last_percentage: f64,
    /// Raw text of the custom amount input
    pub fixed_amount: String,
    /// Current slider ceiling
    pub dynamic_max: f64,
    pub selected_preset: Option<u32>,
    pub selected_smart_preset: Option<u32>,
    pub show_fixed_input: bool,
    pub round_up: bool,
}

impl DonationState {
    pub fn new(variant: DonationVariant, policy: &DonationPolicy) -> Self {
        let default = policy.default_percentage;
        let mut state = Self {
            variant,
            donation_type: DonationType::Percentage,
            percentage: default,
            last_percentage: default,
            fixed_amount: String::new(),
            dynamic_max: policy.default_ceiling,
            selected_preset: None,
            selected_smart_preset: None,
            show_fixed_input: false,
            round_up: false,
        };

        match variant {
            DonationVariant::Slider => {}
            DonationVariant::Presets => {
                state.selected_preset = Some(DEFAULT_PRESET);
                state.percentage = 0.0;
            }
            DonationVariant::SmartPresets => {
                state.selected_smart_preset = Some(default as u32);
                state.percentage = 0.0;
            }
            DonationVariant::Cards => {
                state.fixed_amount = DEFAULT_CARD.to_string();
                state.percentage = 0.0;
            }
        }
        state
    }

    /// Throw everything away and start over in `variant`
    pub fn reset(&mut self, variant: DonationVariant, policy: &DonationPolicy) {
        debug!(?variant, "resetting donation state");
        *self = Self::new(variant, policy);
    }

    /// The single input that currently decides the amount
    pub fn mode(&self) -> DonationMode {
        let typed = parse_amount(&self.fixed_amount);
        match self.variant {
            DonationVariant::Slider => match self.donation_type {
                DonationType::Fixed => DonationMode::Fixed(typed),
                DonationType::Percentage => DonationMode::Percentage(self.percentage),
            },
            DonationVariant::Presets => match self.selected_preset {
                Some(amount) => DonationMode::Preset(amount),
                None => DonationMode::Fixed(typed),
            },
            DonationVariant::SmartPresets => match self.selected_smart_preset {
                Some(percent) => DonationMode::SmartPreset(percent),
                None => DonationMode::Fixed(typed),
            },
            DonationVariant::Cards => DonationMode::Card(typed),
        }
    }

    /// Amount from the active mode, before any round-up
    pub fn base_amount(&self, total: f64) -> f64 {
        self.mode().amount(total)
    }

    /// Amount to charge, including the round-up top-up when enabled
    pub fn amount(&self, total: f64, policy: &DonationPolicy) -> f64 {
        let base = self.base_amount(total);
        if self.round_up && policy.round_up_available {
            base + round_up_top_up(total, base)
        } else {
            base
        }
    }

    /// Where the slider handle sits
    pub fn slider_position(&self) -> f64 {
        match self.donation_type {
            DonationType::Fixed => self.last_percentage,
            DonationType::Percentage => self.percentage,
        }
    }

    /// Move the slider. Touching it while a typed amount is active throws the
    /// amount away and returns to the default percentage instead.
    pub fn slide_to(&mut self, value: f64, policy: &DonationPolicy) {
        if self.donation_type == DonationType::Fixed {
            debug!("slider moved during fixed amount, restoring defaults");
            self.donation_type = DonationType::Percentage;
            self.fixed_amount.clear();
            self.dynamic_max = policy.default_ceiling;
            self.show_fixed_input = false;
            self.percentage = policy.default_percentage;
            self.last_percentage = policy.default_percentage;
            return;
        }

        let value = policy.apply_floor(value.clamp(0.0, policy.default_ceiling.max(self.dynamic_max)));
        self.percentage = value;
        self.last_percentage = value;
        self.donation_type = DonationType::Percentage;
        self.fixed_amount.clear();
        self.dynamic_max = policy.default_ceiling;
        self.clamp_position();
    }

    pub fn show_custom_amount(&mut self) {
        self.show_fixed_input = true;
    }

    /// Apply text typed into the custom amount input.
    ///
    /// Returns `false` and leaves the state alone when the text is not a
    /// plain decimal.
    pub fn type_fixed_amount(&mut self, text: &str, total: f64, policy: &DonationPolicy) -> bool {
        if !AMOUNT_INPUT.is_match(text) {
            return false;
        }

        self.fixed_amount = text.to_string();
        self.selected_preset = None;
        self.selected_smart_preset = None;

        if text.is_empty() {
            if self.variant == DonationVariant::Slider {
                self.donation_type = DonationType::Percentage;
                self.dynamic_max = policy.default_ceiling;
                self.clamp_position();
            }
            return true;
        }

        self.donation_type = DonationType::Fixed;
        if let Some(adjustment) = adjust_range(leading_number(text), total, policy) {
            debug!(
                dynamic_max = adjustment.dynamic_max,
                position = adjustment.position,
                "slider range adjusted for typed amount"
            );
            self.dynamic_max = adjustment.dynamic_max;
            self.last_percentage = adjustment.position;
        }
        self.clamp_position();
        true
    }

    pub fn select_preset(&mut self, amount: u32) {
        self.selected_preset = Some(amount);
        self.fixed_amount.clear();
        self.percentage = 0.0;
        self.selected_smart_preset = None;
    }

    pub fn select_smart_preset(&mut self, percent: u32) {
        self.selected_smart_preset = Some(percent);
        self.fixed_amount.clear();
        self.percentage = 0.0;
        self.selected_preset = None;
    }

    pub fn select_card(&mut self, amount: u32) {
        self.fixed_amount = amount.to_string();
        self.selected_preset = None;
        self.selected_smart_preset = None;
    }

    /// Focusing the "other amount" input drops any preset highlight
    pub fn clear_preset_selection(&mut self) {
        self.selected_preset = None;
        self.selected_smart_preset = None;
    }

    /// Turn the round-up option on or off; ignored when the policy has none
    pub fn set_round_up(&mut self, on: bool, policy: &DonationPolicy) -> bool {
        if !policy.round_up_available {
            return false;
        }
        self.round_up = on;
        true
    }

    /// Is the card for `amount` the one currently chosen
    pub fn is_card_selected(&self, amount: u32) -> bool {
        leading_number(&self.fixed_amount) == Some(f64::from(amount))
    }

    fn clamp_position(&mut self) {
        if self.last_percentage > self.dynamic_max {
            self.last_percentage = self.dynamic_max;
        }
    }
}

/// Smallest top-up that makes `total + donation` a whole pound
fn round_up_top_up(total: f64, donation: f64) -> f64 {
    let pence = ((total + donation) * 100.0).round() as i64;
    let remainder = pence.rem_euclid(100);
    if remainder == 0 {
        0.0
    } else {
        (100 - remainder) as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> DonationPolicy {
        DonationPolicy::classic()
    }

    #[test]
    fn test_slider_defaults_per_policy() {
        let state = DonationState::new(DonationVariant::Slider, &classic());
        assert_eq!(state.percentage, 10.0);
        assert_eq!(state.dynamic_max, 20.0);

        let state = DonationState::new(DonationVariant::Slider, &DonationPolicy::revised());
        assert_eq!(state.percentage, 15.0);
        assert_eq!(state.dynamic_max, 25.0);
    }

    #[test]
    fn test_variant_defaults() {
        let policy = classic();
        assert_eq!(DonationState::new(DonationVariant::Presets, &policy).mode(), DonationMode::Preset(10));
        assert_eq!(
            DonationState::new(DonationVariant::SmartPresets, &policy).mode(),
            DonationMode::SmartPreset(10)
        );
        assert_eq!(DonationState::new(DonationVariant::Cards, &policy).mode(), DonationMode::Card(10.0));
    }

    #[test]
    fn test_percentage_amount() {
        let policy = classic();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        assert_eq!(state.amount(64.0, &policy), 6.4);
        state.slide_to(20.0, &policy);
        assert_eq!(state.amount(64.0, &policy), 12.8);
        assert_eq!(state.amount(0.0, &policy), 0.0);
    }

    #[test]
    fn test_rejects_non_decimal_input() {
        let policy = classic();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        assert!(!state.type_fixed_amount("12a", 64.0, &policy));
        assert!(!state.type_fixed_amount("1.2.3", 64.0, &policy));
        assert!(!state.type_fixed_amount("-4", 64.0, &policy));
        assert_eq!(state.donation_type, DonationType::Percentage);
        assert!(state.fixed_amount.is_empty());
    }

    #[test]
    fn test_typed_amount_switches_to_fixed() {
        let policy = classic();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        assert!(state.type_fixed_amount("50", 20.0, &policy));
        assert_eq!(state.donation_type, DonationType::Fixed);
        assert_eq!(state.dynamic_max, 200.0);
        assert_eq!(state.slider_position(), 200.0);
        assert_eq!(state.amount(20.0, &policy), 50.0);
    }

    #[test]
    fn test_clearing_typed_amount_returns_to_percentage() {
        let policy = classic();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        state.type_fixed_amount("50", 20.0, &policy);
        state.type_fixed_amount("", 20.0, &policy);
        assert_eq!(state.donation_type, DonationType::Percentage);
        assert_eq!(state.dynamic_max, 20.0);
    }

    #[test]
    fn test_slider_after_fixed_restores_defaults() {
        let policy = classic();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        state.show_custom_amount();
        state.type_fixed_amount("30", 64.0, &policy);
        state.slide_to(5.0, &policy);
        assert_eq!(state.fixed_amount, "");
        assert_eq!(state.percentage, 10.0);
        assert!(!state.show_fixed_input);
        assert_eq!(state.donation_type, DonationType::Percentage);
    }

    #[test]
    fn test_revised_floor_on_slider() {
        let policy = DonationPolicy::revised();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        state.slide_to(0.0, &policy);
        assert_eq!(state.percentage, 5.0);
    }

    #[test]
    fn test_presets_fall_back_to_typed_amount() {
        let policy = classic();
        let mut state = DonationState::new(DonationVariant::Presets, &policy);
        state.select_preset(50);
        assert_eq!(state.amount(64.0, &policy), 50.0);
        state.type_fixed_amount("7.5", 64.0, &policy);
        assert_eq!(state.selected_preset, None);
        assert_eq!(state.amount(64.0, &policy), 7.5);
        // typing nothing in a preset layout stays on the (empty) typed amount
        state.type_fixed_amount("", 64.0, &policy);
        assert_eq!(state.amount(64.0, &policy), 0.0);
    }

    #[test]
    fn test_smart_preset_clears_flat_preset() {
        let policy = classic();
        let mut state = DonationState::new(DonationVariant::SmartPresets, &policy);
        state.select_smart_preset(20);
        assert_eq!(state.amount(64.0, &policy), 12.8);
        assert_eq!(state.selected_preset, None);
        state.clear_preset_selection();
        assert_eq!(state.mode(), DonationMode::Fixed(0.0));
    }

    #[test]
    fn test_cards() {
        let policy = classic();
        let mut state = DonationState::new(DonationVariant::Cards, &policy);
        assert!(state.is_card_selected(10));
        state.select_card(200);
        assert!(state.is_card_selected(200));
        assert_eq!(state.amount(0.0, &policy), 200.0);
    }

    #[test]
    fn test_round_up_only_with_revised_policy() {
        let classic = classic();
        let mut state = DonationState::new(DonationVariant::Slider, &classic);
        assert!(!state.set_round_up(true, &classic));

        let revised = DonationPolicy::revised();
        let mut state = DonationState::new(DonationVariant::Slider, &revised);
        assert!(state.set_round_up(true, &revised));
        // 15% of £63.00 is £9.45, grand total £72.45 rounds to £73.00
        let amount = state.amount(63.0, &revised);
        assert!((amount - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_up_top_up() {
        assert_eq!(round_up_top_up(64.0, 6.0), 0.0);
        assert!((round_up_top_up(64.0, 6.4) - 0.6).abs() < 1e-9);
    }
}
