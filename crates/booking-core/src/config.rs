//! Storefront Configuration
//!
//! Per-club settings, read from JSON. Every field has a default so a
//! partial file is enough.

use serde::{Deserialize, Serialize};

use crate::basket::Participant;
use crate::donation::{DonationPolicy, DonationVariant, PolicyKind};
use crate::error::BookingResult;

/// A sign-in account for the demo directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntry {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub org_name: String,
    pub org_logo: String,
    pub currency_symbol: String,
    pub donation_policy: PolicyKind,
    pub donation_variant: DonationVariant,
    pub accounts: Vec<AccountEntry>,
    /// People the signed-in family can book lessons for
    pub participants: Vec<Participant>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            org_name: "JoinIn".to_string(),
            org_logo: "public/logo.svg".to_string(),
            currency_symbol: "£".to_string(),
            donation_policy: PolicyKind::Classic,
            donation_variant: DonationVariant::Slider,
            accounts: Vec::new(),
            participants: Vec::new(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> BookingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn policy(&self) -> DonationPolicy {
        DonationPolicy::from_kind(self.donation_policy)
    }
}
