//! Donation Slider Component
//!
//! Percentage slider with a tooltip, marks and an optional typed amount.

use booking_core::donation::display::{
    slider_marks, slider_step, summary_visible, tooltip_label, tooltip_offset, tooltip_visible,
};
use booking_core::format_money;
use leptos::prelude::*;

use crate::components::checkout_donation::DonationSignal;
use crate::context::AppContext;

#[component]
pub fn DonationSlider(donation: DonationSignal) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let currency = ctx.currency();

    let dynamic_max = Memo::new(move |_| donation.with(|c| c.state().dynamic_max));
    let show_custom = Memo::new(move |_| donation.with(|c| c.state().show_fixed_input));
    let step = move || donation.with(|c| slider_step(c.state().dynamic_max, c.policy())).to_string();
    let position = move || donation.with(|c| c.state().slider_position()).to_string();
    let label = {
        let currency = currency.clone();
        move || donation.with(|c| tooltip_label(c.state(), c.basket_total(), &currency))
    };
    let summary = move || donation.with(|c| format_money(&currency, c.amount()));

    view! {
        <div class="donation-slider">
            <div class="slider-track">
                <Show when=move || donation.with(|c| tooltip_visible(c.state()))>
                    <div
                        class="slider-tooltip"
                        style=move || format!("left: {}%;", donation.with(|c| tooltip_offset(c.state())))
                    >
                        {label.clone()}
                    </div>
                </Show>
                <input
                    type="range"
                    min="0"
                    max=move || dynamic_max.get().to_string()
                    step=step
                    prop:value=position
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            donation.update(|c| c.slide_to(value));
                        }
                    }
                />
                <div class="slider-marks">
                    {move || {
                        let max = dynamic_max.get();
                        slider_marks(max).into_iter().map(|(value, text)| {
                            let offset = if max > 0.0 { f64::from(value) / max * 100.0 } else { 0.0 };
                            view! { <span class="slider-mark" style=format!("left: {}%;", offset)>{text}</span> }
                        }).collect_view()
                    }}
                </div>
            </div>

            <Show
                when=move || show_custom.get()
                fallback=move || view! {
                    <button
                        type="button"
                        class="text-btn"
                        on:click=move |_| donation.update(|c| c.show_custom_amount())
                    >
                        "Enter a custom amount"
                    </button>
                }
            >
                <CustomAmountInput donation=donation placeholder="Custom amount" />
            </Show>

            <Show when=move || donation.with(|c| summary_visible(c.state(), c.amount()))>
                <div class="donation-summary">
                    <span>"Your donation"</span>
                    <span class="heading">{summary.clone()}</span>
                </div>
            </Show>
        </div>
    }
}

/// Free-text amount box shared by every donation layout
#[component]
pub fn CustomAmountInput(donation: DonationSignal, #[prop(into)] placeholder: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let currency = ctx.currency();

    view! {
        <label class="custom-amount">
            <span class="currency-prefix">{currency}</span>
            <input
                type="text"
                inputmode="decimal"
                placeholder=placeholder
                prop:value=move || donation.with(|c| c.state().fixed_amount.clone())
                on:focus=move |_| donation.update(|c| c.clear_preset_selection())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    let accepted = donation.try_update(|c| c.type_fixed_amount(&text)).unwrap_or(false);
                    if !accepted {
                        // put back the last accepted text
                        let previous = donation.with_untracked(|c| c.state().fixed_amount.clone());
                        event_target::<web_sys::HtmlInputElement>(&ev).set_value(&previous);
                    }
                }
            />
        </label>
    }
}
