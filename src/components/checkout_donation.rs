//! Checkout Donation Step
//!
//! Hosts whichever donation layout is active. The controller lives in a
//! local signal owned by the checkout; every handler goes through it so the
//! basket always holds the current amount.

use booking_core::donation::display::thank_you_message;
use booking_core::donation::{DonationController, DonationVariant};
use booking_core::format_money;
use leptos::prelude::*;

use crate::components::{DonationCards, DonationPresets, DonationSlider, FormHeader, VariantSelector};
use crate::context::AppContext;
use crate::store::StoreBasket;

pub type DonationSignal = RwSignal<DonationController<StoreBasket>, LocalStorage>;

#[component]
pub fn CheckoutDonation(donation: DonationSignal) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let currency = ctx.currency();

    let variant = Memo::new(move |_| donation.with(|c| c.state().variant));
    let round_up_available = donation.with_untracked(|c| c.policy().round_up_available);
    let thank_you = move || donation.with(|c| thank_you_message(&c.state().fixed_amount));
    let amount = move || donation.with(|c| format_money(&currency, c.amount()));

    view! {
        <section class="checkout-step donation-step">
            <FormHeader
                title="Add a donation"
                subtitle="Help keep the club running. Donations are optional."
                icon="💙"
            />
            <VariantSelector
                current=variant
                on_change=move |v: DonationVariant| donation.update(|c| c.set_variant(v))
            />

            {move || match variant.get() {
                DonationVariant::Slider => view! { <DonationSlider donation=donation /> }.into_any(),
                DonationVariant::Presets => view! { <DonationPresets donation=donation smart=false /> }.into_any(),
                DonationVariant::SmartPresets => view! { <DonationPresets donation=donation smart=true /> }.into_any(),
                DonationVariant::Cards => view! { <DonationCards donation=donation /> }.into_any(),
            }}

            <Show when=move || round_up_available>
                <label class="round-up">
                    <input
                        type="checkbox"
                        prop:checked=move || donation.with(|c| c.state().round_up)
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            donation.update(|c| {
                                c.set_round_up(on);
                            });
                        }
                    />
                    "Round up my total to the nearest pound"
                </label>
            </Show>

            {move || thank_you().map(|message| view! { <p class="thank-you">{message}</p> })}

            <div class="donation-total">
                <span>"Donation"</span>
                <span class="heading">{amount}</span>
            </div>
        </section>
    }
}
