//! Donation Display Helpers
//!
//! Text and geometry for the donation widgets: slider tooltip, marks and
//! step, preset lists, card taglines and thank-you lines.

use std::collections::BTreeMap;

use super::mode::{DonationType, DonationVariant};
use super::policy::{DonationPolicy, MAX_PERCENTAGE, PERCENT_STEP};
use super::state::DonationState;
use crate::price::{format_money, leading_number, parse_amount};

pub const PRESET_AMOUNTS: [u32; 5] = [5, 10, 20, 50, 100];
pub const SMART_PRESET_PERCENTAGES: [u32; 4] = [5, 10, 15, 20];
pub const CARD_AMOUNTS: [u32; 6] = [5, 10, 25, 50, 100, 200];

/// Text above the slider handle, e.g. `10% (£6.40)` or `200%+ (£50.00)`
pub fn tooltip_label(state: &DonationState, total: f64, symbol: &str) -> String {
    match state.donation_type {
        DonationType::Fixed => {
            let typed = parse_amount(&state.fixed_amount);
            let actual = if total > 0.0 { typed / total * 100.0 } else { 0.0 };
            let percent = if actual > MAX_PERCENTAGE {
                format!("{}%+", MAX_PERCENTAGE)
            } else {
                format!("{:.1}%", state.last_percentage)
            };
            format!("{} ({})", percent, format_money(symbol, typed))
        }
        DonationType::Percentage => format!(
            "{}% ({})",
            state.percentage,
            format_money(symbol, total * state.percentage / 100.0)
        ),
    }
}

/// The tooltip shows for any percentage, or for a positive typed amount
pub fn tooltip_visible(state: &DonationState) -> bool {
    match state.donation_type {
        DonationType::Percentage => state.percentage >= 0.0,
        DonationType::Fixed => {
            parse_amount(&state.fixed_amount) > 0.0 && state.last_percentage >= 0.0
        }
    }
}

/// Horizontal tooltip position as a percentage of the slider track
pub fn tooltip_offset(state: &DonationState) -> f64 {
    if state.dynamic_max > 0.0 {
        (state.slider_position() / state.dynamic_max * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Five evenly spread marks from 0 to the ceiling
pub fn slider_marks(dynamic_max: f64) -> Vec<(u32, String)> {
    let max = dynamic_max.round() as u32;
    let mut marks = BTreeMap::new();
    marks.insert(0, "0%".to_string());
    for i in 1..=3 {
        let value = (f64::from(max * i) / 4.0).round() as u32;
        marks.insert(value, format!("{}%", value));
    }
    marks.insert(max, format!("{}%", max));
    marks.into_iter().collect()
}

/// Notch size: 5 inside the default band, finer once the ceiling is raised
pub fn slider_step(dynamic_max: f64, policy: &DonationPolicy) -> f64 {
    if dynamic_max <= policy.default_ceiling {
        PERCENT_STEP
    } else {
        dynamic_max / 100.0
    }
}

/// The "Donation +£x" summary row only accompanies a typed slider amount
pub fn summary_visible(state: &DonationState, amount: f64) -> bool {
    amount > 0.0 && state.variant == DonationVariant::Slider && state.donation_type == DonationType::Fixed
}

/// Caption and emoji for the larger cards
pub fn card_tagline(amount: u32) -> Option<(&'static str, &'static str)> {
    match amount {
        50 => Some(("Heart Warming", "❤️")),
        100 => Some(("Truly Amazing", "🚀")),
        200 => Some(("Absolutely Incredible", "💎")),
        _ => None,
    }
}

/// Thank-you line under the card grid input; `None` until an amount is typed
pub fn thank_you_message(fixed_amount: &str) -> Option<&'static str> {
    let amount = leading_number(fixed_amount).filter(|v| *v > 0.0)?;
    let message = match amount {
        a if a == 5.0 => "💙 Every little bit helps - thank you!",
        a if a == 10.0 => "✨ Thank you for your support!",
        a if a == 25.0 => "🌟 Your generosity makes a real difference!",
        a if a == 50.0 => "🎉 Thank you for your generous contribution!",
        a if a == 100.0 => "🚀 Your amazing support helps us grow!",
        a if a == 200.0 => "💎 Incredible generosity - thank you so much!",
        a if a >= 50.0 => "🌟 Thank you for your generous support!",
        a if a >= 25.0 => "💙 Every contribution makes a difference",
        _ => "✨ Thank you for supporting us",
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_label() {
        let policy = DonationPolicy::classic();
        let state = DonationState::new(DonationVariant::Slider, &policy);
        assert_eq!(tooltip_label(&state, 64.0, "£"), "10% (£6.40)");
        assert!(tooltip_visible(&state));
        assert_eq!(tooltip_offset(&state), 50.0);
    }

    #[test]
    fn test_fixed_label_caps_at_two_hundred() {
        let policy = DonationPolicy::classic();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        state.type_fixed_amount("50", 20.0, &policy);
        assert_eq!(tooltip_label(&state, 20.0, "£"), "200%+ (£50.00)");
        assert_eq!(tooltip_offset(&state), 100.0);

        state.type_fixed_amount("8", 64.0, &policy);
        assert_eq!(tooltip_label(&state, 64.0, "£"), "15.0% (£8.00)");
    }

    #[test]
    fn test_overflowing_amount_labels_what_is_charged() {
        let policy = DonationPolicy::classic();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        assert!(state.type_fixed_amount(&"9".repeat(400), 64.0, &policy));
        assert_eq!(state.amount(64.0, &policy), 0.0);

        let label = tooltip_label(&state, 64.0, "£");
        assert!(label.ends_with("(£0.00)"), "{}", label);
        assert!(!label.contains("inf"));
        assert!(!tooltip_visible(&state));
    }

    #[test]
    fn test_fixed_tooltip_hidden_for_zero() {
        let policy = DonationPolicy::classic();
        let mut state = DonationState::new(DonationVariant::Slider, &policy);
        state.type_fixed_amount("0", 64.0, &policy);
        assert!(!tooltip_visible(&state));
    }

    #[test]
    fn test_marks() {
        let marks = slider_marks(20.0);
        let values: Vec<u32> = marks.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![0, 5, 10, 15, 20]);
        assert_eq!(marks[4].1, "20%");

        let values: Vec<u32> = slider_marks(25.0).iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![0, 6, 13, 19, 25]);
    }

    #[test]
    fn test_step() {
        let policy = DonationPolicy::classic();
        assert_eq!(slider_step(20.0, &policy), 5.0);
        assert_eq!(slider_step(200.0, &policy), 2.0);
    }

    #[test]
    fn test_messages() {
        assert_eq!(card_tagline(100), Some(("Truly Amazing", "🚀")));
        assert_eq!(card_tagline(25), None);
        assert_eq!(thank_you_message(""), None);
        assert_eq!(thank_you_message("10"), Some("✨ Thank you for your support!"));
        assert_eq!(thank_you_message("30"), Some("💙 Every contribution makes a difference"));
        assert_eq!(thank_you_message("3"), Some("✨ Thank you for supporting us"));
    }
}
