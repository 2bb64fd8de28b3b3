//! Donation Policy
//!
//! Two rule sets exist for the donation step and they differ on purpose:
//! the classic one (10% default inside a 0-20% band) and the revised one
//! (15% default inside 0-25%, never below 5%, with a round-up option).

use serde::{Deserialize, Serialize};

/// Hard cap for any percentage implied by a typed amount
pub const MAX_PERCENTAGE: f64 = 200.0;

/// Slider notch size inside the default band
pub const PERCENT_STEP: f64 = 5.0;

/// Which rule set the storefront runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Classic,
    Revised,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationPolicy {
    pub kind: PolicyKind,
    /// Slider position after a reset
    pub default_percentage: f64,
    /// Slider maximum unless a typed amount widens it
    pub default_ceiling: f64,
    /// Lowest slider position allowed, if any
    pub floor: Option<f64>,
    /// Whether the shopper may round the grand total up
    pub round_up_available: bool,
}

impl DonationPolicy {
    pub const fn classic() -> Self {
        Self {
            kind: PolicyKind::Classic,
            default_percentage: 10.0,
            default_ceiling: 20.0,
            floor: None,
            round_up_available: false,
        }
    }

    pub const fn revised() -> Self {
        Self {
            kind: PolicyKind::Revised,
            default_percentage: 15.0,
            default_ceiling: 25.0,
            floor: Some(5.0),
            round_up_available: true,
        }
    }

    pub const fn from_kind(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Classic => Self::classic(),
            PolicyKind::Revised => Self::revised(),
        }
    }

    /// Raise a slider position to the floor when one applies
    pub fn apply_floor(&self, percentage: f64) -> f64 {
        match self.floor {
            Some(floor) if percentage < floor => floor,
            _ => percentage,
        }
    }
}

impl Default for DonationPolicy {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_only_in_revised() {
        assert_eq!(DonationPolicy::classic().apply_floor(0.0), 0.0);
        assert_eq!(DonationPolicy::revised().apply_floor(0.0), 5.0);
        assert_eq!(DonationPolicy::revised().apply_floor(12.0), 12.0);
    }

    #[test]
    fn test_from_kind() {
        assert_eq!(DonationPolicy::from_kind(PolicyKind::Revised).default_ceiling, 25.0);
        assert_eq!(DonationPolicy::default().kind, PolicyKind::Classic);
    }
}
