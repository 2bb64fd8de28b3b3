//! Checkout Progress Component
//!
//! Step tabs above the checkout; earlier steps can be revisited.

use booking_core::checkout::CheckoutFlow;
use leptos::prelude::*;

#[component]
pub fn CheckoutProgress(flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    let titles = move || flow.with(|f| f.titles().iter().cloned().enumerate().collect::<Vec<_>>());

    view! {
        <nav class="checkout-progress">
            <For
                each=titles
                key=|(index, title)| (*index, title.clone())
                children=move |(index, title)| {
                    let tab_class = move || {
                        flow.with(|f| {
                            if f.current() == index {
                                "checkout-tab active"
                            } else if f.is_valid(index) {
                                "checkout-tab done"
                            } else {
                                "checkout-tab"
                            }
                        })
                    };

                    view! {
                        <button
                            class=tab_class
                            disabled=move || flow.with(|f| index > f.current())
                            on:click=move |_| flow.update(|f| {
                                let _ = f.go_to(index);
                            })
                        >
                            <span class="checkout-tab-number">{index + 1}</span>
                            {title}
                        </button>
                    }
                }
            />
        </nav>
    }
}
