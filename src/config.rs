//! Storefront Configuration
//!
//! `storefront.json` is embedded at build time.

use booking_core::StorefrontConfig;
use tracing::warn;

const STOREFRONT_JSON: &str = include_str!("../storefront.json");

/// Parse the embedded config; a broken file falls back to defaults
pub fn load_config() -> StorefrontConfig {
    StorefrontConfig::from_json(STOREFRONT_JSON).unwrap_or_else(|err| {
        warn!(error = %err, "storefront.json is malformed, using defaults");
        StorefrontConfig::default()
    })
}
