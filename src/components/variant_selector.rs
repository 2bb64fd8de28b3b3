//! Variant Selector Component
//!
//! Switches between the donation layouts.

use booking_core::donation::DonationVariant;
use leptos::prelude::*;

#[component]
pub fn VariantSelector(
    #[prop(into)] current: Signal<DonationVariant>,
    on_change: impl Fn(DonationVariant) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="variant-selector">
            {DonationVariant::ALL.iter().map(|variant| {
                let variant = *variant;
                let is_selected = move || current.get() == variant;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "variant-btn active" } else { "variant-btn" }
                        on:click=move |_| on_change(variant)
                    >
                        {variant.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
