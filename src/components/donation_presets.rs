//! Donation Presets Component
//!
//! Flat amount buttons, or percentage-of-basket buttons when `smart`.

use booking_core::donation::display::{PRESET_AMOUNTS, SMART_PRESET_PERCENTAGES};
use booking_core::format_money;
use leptos::prelude::*;

use crate::components::checkout_donation::DonationSignal;
use crate::components::donation_slider::CustomAmountInput;
use crate::context::AppContext;

#[component]
pub fn DonationPresets(donation: DonationSignal, smart: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let currency = ctx.currency();

    let buttons = if smart {
        SMART_PRESET_PERCENTAGES
            .iter()
            .map(|percent| {
                let percent = *percent;
                let currency = currency.clone();
                let is_selected = move || donation.with(|c| c.state().selected_smart_preset == Some(percent));
                let share = move || {
                    donation.with(|c| format_money(&currency, c.basket_total() * f64::from(percent) / 100.0))
                };
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "preset-btn active" } else { "preset-btn" }
                        on:click=move |_| donation.update(|c| c.select_smart_preset(percent))
                    >
                        <span class="heading">{format!("{}%", percent)}</span>
                        <span class="sub-heading-xs">{share}</span>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    } else {
        PRESET_AMOUNTS
            .iter()
            .map(|amount| {
                let amount = *amount;
                let is_selected = move || donation.with(|c| c.state().selected_preset == Some(amount));
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "preset-btn active" } else { "preset-btn" }
                        on:click=move |_| donation.update(|c| c.select_preset(amount))
                    >
                        {format!("{}{}", currency, amount)}
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="donation-presets">
            <div class="preset-grid">{buttons}</div>
            <CustomAmountInput donation=donation placeholder="Other amount" />
        </div>
    }
}
