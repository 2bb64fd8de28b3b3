//! Donation
//!
//! The optional donation offered at checkout.

mod controller;
mod mode;
mod policy;
mod range;
mod state;

pub mod display;

pub use controller::DonationController;
pub use mode::{DonationMode, DonationType, DonationVariant};
pub use policy::{DonationPolicy, PolicyKind, MAX_PERCENTAGE, PERCENT_STEP};
pub use range::{adjust_range, implied_percentage, RangeAdjustment};
pub use state::DonationState;
