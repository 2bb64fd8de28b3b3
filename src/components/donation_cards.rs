//! Donation Cards Component
//!
//! Larger tiles for fixed amounts; the top three carry a tagline.

use booking_core::donation::display::{card_tagline, CARD_AMOUNTS};
use leptos::prelude::*;

use crate::components::checkout_donation::DonationSignal;
use crate::components::donation_slider::CustomAmountInput;
use crate::context::AppContext;

#[component]
pub fn DonationCards(donation: DonationSignal) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let currency = ctx.currency();

    view! {
        <div class="donation-cards">
            <div class="card-grid">
                {CARD_AMOUNTS.iter().map(|amount| {
                    let amount = *amount;
                    let is_selected = move || donation.with(|c| c.state().is_card_selected(amount));
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "donation-card active" } else { "donation-card" }
                            on:click=move |_| donation.update(|c| c.select_card(amount))
                        >
                            <span class="heading">{format!("{}{}", currency, amount)}</span>
                            {card_tagline(amount).map(|(tagline, emoji)| view! {
                                <span class="card-tagline">{emoji} " " {tagline}</span>
                            })}
                        </button>
                    }
                }).collect_view()}
            </div>
            <CustomAmountInput donation=donation placeholder="Other amount" />
        </div>
    }
}
