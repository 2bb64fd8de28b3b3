//! Club Booking Storefront App
//!
//! Header, the current page, and the basket drawer and sign-in modal
//! layered over it.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{info, warn};

use crate::components::{
    AcceptInvite, BasketDrawer, CalendarPage, Checkout, ContactForm, ProductPage, SignInModal, SiteHeader,
};
use crate::config::load_config;
use crate::context::AppContext;
use crate::models::Page;
use crate::storage;
use crate::store::{BasketState, BasketStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    info!(org = %config.org_name, policy = ?config.donation_policy, variant = ?config.donation_variant, "storefront starting");

    let restored = storage::load_basket().unwrap_or_else(|err| {
        warn!(error = %err, "could not restore the basket");
        Vec::new()
    });
    let store = Store::new(BasketState::new(restored));
    provide_context(store);

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let (page, set_page) = signal(Page::landing(&search));
    let (basket_open, set_basket_open) = signal(false);
    let (sign_in_open, set_sign_in_open) = signal(false);

    // Provide context to all children
    provide_context(AppContext::new(
        (page, set_page),
        (basket_open, set_basket_open),
        (sign_in_open, set_sign_in_open),
        config,
    ));

    // Save the basket whenever its lines change
    Effect::new(move |_| {
        let items = store.items().get();
        if let Err(err) = storage::save_basket(&items) {
            warn!(error = %err, "could not save the basket");
        }
    });

    view! {
        <div class="app-layout">
            <SiteHeader />

            <main class="main-content">
                {move || match page.get() {
                    Page::Calendar => view! { <CalendarPage /> }.into_any(),
                    Page::Product => view! { <ProductPage /> }.into_any(),
                    Page::Checkout => view! { <Checkout /> }.into_any(),
                    Page::Contact => view! { <ContactForm /> }.into_any(),
                    Page::AcceptInvite => view! { <AcceptInvite /> }.into_any(),
                }}
            </main>

            <BasketDrawer />
            <SignInModal />
        </div>
    }
}
