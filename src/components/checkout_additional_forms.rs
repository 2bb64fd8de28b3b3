//! Checkout Additional Forms Step
//!
//! Per-participant questions. Errors only show after a failed submit.

use booking_core::checkout::{questions_field, AdditionalInfoStep, CheckoutStep};
use booking_core::BookingError;
use leptos::prelude::*;

use crate::components::FormHeader;
use crate::store::StoreBasket;

pub type AdditionalInfoSignal = RwSignal<AdditionalInfoStep<StoreBasket>, LocalStorage>;

#[component]
pub fn CheckoutAdditionalForms(
    additional: AdditionalInfoSignal,
    /// Set once the shopper has tried to continue
    show_errors: ReadSignal<bool>,
) -> impl IntoView {
    let participants = move || {
        additional.with(|step| {
            step.answers()
                .iter()
                .map(|a| (a.participant.id, a.participant.full_name()))
                .collect::<Vec<_>>()
        })
    };
    let error_for = move |id: u32| {
        if !show_errors.get() {
            return None;
        }
        additional.with(|step| match step.validate() {
            Err(BookingError::Validation(errors)) => errors.message_for(&questions_field(id)).map(str::to_string),
            _ => None,
        })
    };

    view! {
        <section class="checkout-step additional-step">
            <FormHeader
                title="Additional information"
                subtitle="A few questions about each participant"
                icon="📝"
            />
            <Show
                when=move || additional.with(|step| !step.answers().is_empty())
                fallback=|| view! { <p class="sub-heading">"Nothing else is needed for this booking."</p> }
            >
                <For
                    each=participants
                    key=|(id, _)| *id
                    children=move |(id, name)| view! {
                        <fieldset class="participant-form">
                            <legend class="heading">{name}</legend>
                            <label class="checkbox-row">
                                <input
                                    type="checkbox"
                                    name=questions_field(id)
                                    prop:checked=move || additional.with(|step| {
                                        step.answers().iter().any(|a| a.participant.id == id && a.questions_answered)
                                    })
                                    on:change=move |ev| {
                                        let answered = event_target_checked(&ev);
                                        additional.update(|step| step.set_questions_answered(id, answered));
                                    }
                                />
                                "I have read and answered the British swimming questions"
                            </label>
                            {move || error_for(id).map(|message| view! { <p class="field-error">{message}</p> })}
                            <label class="field">
                                <span>"Previous coach experience (optional)"</span>
                                <textarea
                                    rows="3"
                                    prop:value=move || additional.with(|step| {
                                        step.answers()
                                            .iter()
                                            .find(|a| a.participant.id == id)
                                            .map(|a| a.coach_experience.clone())
                                            .unwrap_or_default()
                                    })
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        additional.update(|step| step.set_coach_experience(id, text));
                                    }
                                ></textarea>
                            </label>
                        </fieldset>
                    }
                />
            </Show>
        </section>
    }
}
