//! Booking Core
//!
//! Business rules behind the club booking storefront.
//! This crate has no UI dependencies so it can be tested natively:
//! - price / basket: parsing line-item prices and aggregating totals
//! - donation: the optional checkout donation (modes, ranges, display)
//! - checkout: step contract and the multi-step orchestrator
//! - filters / catalogue / product: calendar browsing state
//! - account / contact / validation: form flows

mod error;
mod price;
mod validation;
mod config;

pub mod basket;
pub mod donation;
pub mod checkout;
pub mod filters;
pub mod catalogue;
pub mod product;
pub mod account;
pub mod contact;

#[cfg(test)]
mod tests;

pub use error::{BookingError, BookingResult};
pub use price::{parse_amount, parse_price, format_money};
pub use validation::{checkbox_value, validate_fields, FieldError, Rule, ValidationErrors};
pub use config::{AccountEntry, StorefrontConfig};
pub use basket::{basket_total, BasketContext, BasketItem, CheckoutTotals, InMemoryBasket, Participant};
