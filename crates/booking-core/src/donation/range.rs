//! Dynamic Range Adjuster
//!
//! Keeps the percentage slider meaningful when the shopper types an amount:
//! the ceiling grows in notches of 5 to cover the implied percentage, and
//! shrinks back to the policy default when the amount fits inside it.

use super::policy::{DonationPolicy, MAX_PERCENTAGE, PERCENT_STEP};

/// New slider ceiling and handle position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeAdjustment {
    pub dynamic_max: f64,
    pub position: f64,
}

/// Percentage of the basket a typed amount represents, capped to `[0, 200]`.
///
/// `None` when the basket is empty or the amount is not a usable number.
pub fn implied_percentage(amount: f64, total: f64) -> Option<f64> {
    if !amount.is_finite() || amount < 0.0 || total <= 0.0 {
        return None;
    }
    Some((amount / total * 100.0).clamp(0.0, MAX_PERCENTAGE))
}

/// Work out the slider range for a typed amount.
///
/// Returns `None` when the slider should be left alone (no number, or a
/// non-zero amount against an empty basket).
pub fn adjust_range(amount: Option<f64>, total: f64, policy: &DonationPolicy) -> Option<RangeAdjustment> {
    let amount = amount?;
    let ceiling = policy.default_ceiling;

    let adjustment = match implied_percentage(amount, total) {
        Some(implied) if implied > ceiling => {
            let dynamic_max = ((implied / PERCENT_STEP).ceil() * PERCENT_STEP).min(MAX_PERCENTAGE);
            RangeAdjustment { dynamic_max, position: implied.min(dynamic_max) }
        }
        Some(implied) => {
            let rounded = (implied / PERCENT_STEP).round() * PERCENT_STEP;
            RangeAdjustment { dynamic_max: ceiling, position: rounded.min(ceiling) }
        }
        None if amount == 0.0 => RangeAdjustment { dynamic_max: ceiling, position: 0.0 },
        None => return None,
    };

    Some(RangeAdjustment {
        position: policy.apply_floor(adjustment.position),
        ..adjustment
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_amount_raises_ceiling_to_cap() {
        // £50 against £20 implies 250%, capped at 200
        let adj = adjust_range(Some(50.0), 20.0, &DonationPolicy::classic()).unwrap();
        assert_eq!(adj.dynamic_max, 200.0);
        assert_eq!(adj.position, 200.0);
    }

    #[test]
    fn test_ceiling_rounds_up_to_next_notch() {
        // £14 against £64 implies 21.875%
        let adj = adjust_range(Some(14.0), 64.0, &DonationPolicy::classic()).unwrap();
        assert_eq!(adj.dynamic_max, 25.0);
        assert_eq!(adj.position, 21.875);
    }

    #[test]
    fn test_small_amount_snaps_to_notch_within_band() {
        // £8 against £64 implies 12.5%, rounds to 15 (half away from zero)
        let adj = adjust_range(Some(8.0), 64.0, &DonationPolicy::classic()).unwrap();
        assert_eq!(adj.dynamic_max, 20.0);
        assert_eq!(adj.position, 15.0);

        let adj = adjust_range(Some(5.0), 64.0, &DonationPolicy::classic()).unwrap();
        assert_eq!(adj.position, 10.0);
    }

    #[test]
    fn test_revised_band_and_floor() {
        let policy = DonationPolicy::revised();
        // 22% stays inside the 25% band
        let adj = adjust_range(Some(22.0), 100.0, &policy).unwrap();
        assert_eq!(adj.dynamic_max, 25.0);
        assert_eq!(adj.position, 20.0);

        // 1% is lifted to the 5% floor
        let adj = adjust_range(Some(1.0), 100.0, &policy).unwrap();
        assert_eq!(adj.position, 5.0);
    }

    #[test]
    fn test_empty_basket() {
        let policy = DonationPolicy::classic();
        assert_eq!(
            adjust_range(Some(0.0), 0.0, &policy),
            Some(RangeAdjustment { dynamic_max: 20.0, position: 0.0 })
        );
        assert_eq!(adjust_range(Some(10.0), 0.0, &policy), None);
        assert_eq!(adjust_range(None, 64.0, &policy), None);
    }
}
