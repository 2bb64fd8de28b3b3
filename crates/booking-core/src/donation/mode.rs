//! Donation Modes
//!
//! The layout variant the shopper sees, and the single mode that is active
//! inside it. Each mode knows how to turn the basket total into an amount.

use serde::{Deserialize, Serialize};

/// Layout of the donation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationVariant {
    /// Percentage slider with an optional custom amount
    #[default]
    Slider,
    /// Flat amount buttons
    Presets,
    /// Percentage-of-basket buttons
    SmartPresets,
    /// Card grid of flat amounts
    Cards,
}

impl DonationVariant {
    pub const ALL: [DonationVariant; 4] = [
        DonationVariant::Slider,
        DonationVariant::Presets,
        DonationVariant::SmartPresets,
        DonationVariant::Cards,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DonationVariant::Slider => "1",
            DonationVariant::Presets => "2",
            DonationVariant::SmartPresets => "3",
            DonationVariant::Cards => "4",
        }
    }
}

/// Whether the slider variant reads the slider or the typed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationType {
    #[default]
    Percentage,
    Fixed,
}

/// The active input and the value it carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DonationMode {
    /// Slider percentage of the basket
    Percentage(f64),
    /// Typed amount
    Fixed(f64),
    /// Flat preset button
    Preset(u32),
    /// Percentage preset button
    SmartPreset(u32),
    /// Card amount
    Card(f64),
}

impl DonationMode {
    /// Donation for a basket total; never negative
    pub fn amount(&self, total: f64) -> f64 {
        let amount = match *self {
            DonationMode::Percentage(percentage) => total * percentage / 100.0,
            DonationMode::SmartPreset(percentage) => total * f64::from(percentage) / 100.0,
            DonationMode::Preset(amount) => f64::from(amount),
            DonationMode::Fixed(amount) | DonationMode::Card(amount) => amount,
        };
        amount.max(0.0)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DonationMode::Percentage(_) => "percentage",
            DonationMode::Fixed(_) => "fixed",
            DonationMode::Preset(_) => "preset",
            DonationMode::SmartPreset(_) => "smart_preset",
            DonationMode::Card(_) => "card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_amounts() {
        assert_eq!(DonationMode::Percentage(10.0).amount(64.0), 6.4);
        assert_eq!(DonationMode::SmartPreset(15).amount(20.0), 3.0);
        assert_eq!(DonationMode::Preset(50).amount(0.0), 50.0);
        assert_eq!(DonationMode::Card(25.0).amount(10.0), 25.0);
        assert_eq!(DonationMode::Fixed(-1.0).amount(10.0), 0.0);
    }

    #[test]
    fn test_zero_total_zeroes_percentage_modes() {
        assert_eq!(DonationMode::Percentage(20.0).amount(0.0), 0.0);
        assert_eq!(DonationMode::SmartPreset(20).amount(0.0), 0.0);
    }
}
