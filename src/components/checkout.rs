//! Checkout Component
//!
//! Drives the checkout steps. Each "Continue" submits the current step;
//! the flow only moves on when the step accepts.

use booking_core::checkout::{AdditionalInfoStep, CheckoutFlow, CheckoutStep};
use booking_core::donation::DonationController;
use booking_core::{format_money, CheckoutTotals};
use leptos::prelude::*;
use tracing::{info, warn};

use crate::components::checkout_additional_forms::AdditionalInfoSignal;
use crate::components::checkout_donation::DonationSignal;
use crate::components::{CheckoutAdditionalForms, CheckoutDonation, CheckoutProgress};
use crate::context::AppContext;
use crate::models::Page;
use crate::store::{use_basket_store, BasketStateStoreFields, StoreBasket};

const DONATION_STEP: usize = 0;
const ADDITIONAL_STEP: usize = 1;

#[component]
pub fn Checkout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_basket_store();
    let currency = ctx.currency();
    let (policy, variant) = ctx.config.with_value(|c| (c.policy(), c.donation_variant));

    let (step_valid, set_step_valid) = signal(true);
    let (show_errors, set_show_errors) = signal(false);

    let donation: DonationSignal = RwSignal::new_local(
        DonationController::new(policy, variant, StoreBasket(store))
            .with_validation_listener(move |valid| set_step_valid.set(valid)),
    );
    let additional: AdditionalInfoSignal = RwSignal::new_local(AdditionalInfoStep::new(StoreBasket(store)));

    let titles = vec![
        donation.with_untracked(|c| c.title().to_string()),
        additional.with_untracked(|s| s.title().to_string()),
    ];
    let flow = RwSignal::new(CheckoutFlow::new(titles));
    let current = Memo::new(move |_| flow.with(|f| f.current()));

    // Basket changed: re-derive the donation and the participant list
    Effect::new(move |_| {
        let count = store.items().with(|items| items.len());
        info!(lines = count, "basket changed, refreshing checkout");
        donation.update(|c| {
            c.recompute();
        });
        additional.update(|s| s.refresh());
    });

    let submit_current = move || {
        let index = flow.with_untracked(|f| f.current());
        let passed = match index {
            DONATION_STEP => donation.try_update(|c| c.submit_now()).unwrap_or(false),
            ADDITIONAL_STEP => {
                let passed = additional.try_update(|s| s.submit_now()).unwrap_or(false);
                set_show_errors.set(!passed);
                set_step_valid.set(passed);
                passed
            }
            _ => false,
        };
        flow.update(|f| {
            if let Err(err) = f.advance(passed) {
                warn!(error = %err, "checkout advanced past its last step");
            }
        });
    };

    let totals = move || {
        let donation_amount = store.donation().get();
        store.items().with(|items| CheckoutTotals::compute(items, donation_amount))
    };

    view! {
        <div class="checkout">
            <CheckoutProgress flow=flow />

            <Show
                when=move || !flow.with(|f| f.is_complete())
                fallback=move || view! {
                    <section class="checkout-complete">
                        <h2 class="heading">"Booking complete"</h2>
                        <p class="sub-heading">"Thank you, a confirmation is on its way."</p>
                        <button class="primary-btn" on:click=move |_| ctx.go_to(Page::Calendar)>
                            "Back to lessons"
                        </button>
                    </section>
                }
            >
                {move || match current.get() {
                    DONATION_STEP => view! { <CheckoutDonation donation=donation /> }.into_any(),
                    _ => view! { <CheckoutAdditionalForms additional=additional show_errors=show_errors /> }.into_any(),
                }}

                <div class="checkout-actions">
                    <Show when=move || { current.get() > 0 }>
                        <button class="secondary-btn" on:click=move |_| flow.update(|f| f.back())>"Back"</button>
                    </Show>
                    <button
                        class=move || if step_valid.get() { "primary-btn" } else { "primary-btn invalid" }
                        on:click=move |_| submit_current()
                    >
                        {move || if flow.with(|f| f.is_last()) { "Complete booking" } else { "Continue" }}
                    </button>
                </div>
            </Show>

            <aside class="checkout-totals">
                {move || {
                    let totals = totals();
                    view! {
                        <dl>
                            <dt>"Subtotal"</dt>
                            <dd>{format_money(&currency, totals.subtotal)}</dd>
                            <dt>"Donation"</dt>
                            <dd>{format_money(&currency, totals.donation)}</dd>
                            <dt class="heading">"Total"</dt>
                            <dd class="heading">{format_money(&currency, totals.total)}</dd>
                        </dl>
                    }
                }}
            </aside>
        </div>
    }
}
