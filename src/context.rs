//! Application Context
//!
//! Shared state provided via Leptos Context API.

use booking_core::StorefrontConfig;
use leptos::prelude::*;

use crate::models::Page;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen being shown - read
    pub page: ReadSignal<Page>,
    /// Screen being shown - write
    set_page: WriteSignal<Page>,
    /// Basket drawer visibility - read
    pub basket_open: ReadSignal<bool>,
    /// Basket drawer visibility - write
    set_basket_open: WriteSignal<bool>,
    /// Sign-in modal visibility - read
    pub sign_in_open: ReadSignal<bool>,
    /// Sign-in modal visibility - write
    set_sign_in_open: WriteSignal<bool>,
    /// Email of the signed-in account
    pub signed_in: RwSignal<Option<String>>,
    /// Storefront settings, fixed for the session
    pub config: StoredValue<StorefrontConfig>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        basket_open: (ReadSignal<bool>, WriteSignal<bool>),
        sign_in_open: (ReadSignal<bool>, WriteSignal<bool>),
        config: StorefrontConfig,
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            basket_open: basket_open.0,
            set_basket_open: basket_open.1,
            sign_in_open: sign_in_open.0,
            set_sign_in_open: sign_in_open.1,
            signed_in: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn go_to(&self, page: Page) {
        self.set_basket_open.set(false);
        self.set_page.set(page);
    }

    pub fn open_basket(&self) {
        self.set_basket_open.set(true);
    }

    pub fn close_basket(&self) {
        self.set_basket_open.set(false);
    }

    pub fn open_sign_in(&self) {
        self.set_sign_in_open.set(true);
    }

    pub fn close_sign_in(&self) {
        self.set_sign_in_open.set(false);
    }

    /// Currency symbol prices are shown with
    pub fn currency(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }
}
