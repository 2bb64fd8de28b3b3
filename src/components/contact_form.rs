//! Contact Form Component
//!
//! Form for sending the club a message.

use booking_core::contact::ContactForm as ContactFields;
use booking_core::ValidationErrors;
use leptos::prelude::*;

use crate::components::FormHeader;

/// (field name, label, input type)
const FIELDS: &[(&str, &str, &str)] = &[
    ("first_name", "First name", "text"),
    ("last_name", "Last name", "text"),
    ("email", "Email", "email"),
    ("mobile_number", "Mobile number", "tel"),
];

fn field_mut<'a>(form: &'a mut ContactFields, name: &str) -> Option<&'a mut String> {
    match name {
        "first_name" => Some(&mut form.first_name),
        "last_name" => Some(&mut form.last_name),
        "email" => Some(&mut form.email),
        "mobile_number" => Some(&mut form.mobile_number),
        "message" => Some(&mut form.message),
        _ => None,
    }
}

fn field_value<'a>(form: &'a ContactFields, name: &str) -> &'a str {
    match name {
        "first_name" => &form.first_name,
        "last_name" => &form.last_name,
        "email" => &form.email,
        "mobile_number" => &form.mobile_number,
        "message" => &form.message,
        _ => "",
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFields::default());
    let (errors, set_errors) = signal(ValidationErrors::default());
    let (confirmation, set_confirmation) = signal::<Option<&'static str>>(None);

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(message)) => {
                set_errors.set(ValidationErrors::default());
                set_confirmation.set(Some(message));
            }
            Some(Err(failed)) => {
                set_confirmation.set(None);
                set_errors.set(failed);
            }
            None => {}
        }
    };

    let input = move |name: &'static str| {
        move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            form.update(|f| {
                if let Some(value) = field_mut(f, name) {
                    *value = text;
                }
            });
        }
    };
    let error_for = move |name: &'static str| {
        move || errors.with(|e| e.message_for(name).map(str::to_string))
    };

    view! {
        <form class="contact-form" on:submit=send>
            <FormHeader
                title="Contact us"
                subtitle="Have a question or feedback? Send us a message and we will get back to you as soon as possible."
                icon="✉"
            />

            <Show when=move || confirmation.get().is_some()>
                <p class="confirmation">{move || confirmation.get()}</p>
            </Show>

            {FIELDS.iter().map(|(name, label, kind)| {
                let name = *name;
                let error = error_for(name);
                view! {
                    <label class="field">
                        <span>{*label}</span>
                        <input
                            type=*kind
                            name=name
                            prop:value=move || form.with(|f| field_value(f, name).to_string())
                            on:input=input(name)
                        />
                        {move || error().map(|message| view! { <p class="field-error">{message}</p> })}
                    </label>
                }
            }).collect_view()}

            <label class="field">
                <span>"Message"</span>
                <textarea
                    name="message"
                    rows="5"
                    prop:value=move || form.with(|f| field_value(f, "message").to_string())
                    on:input=input("message")
                ></textarea>
                {move || error_for("message")().map(|message| view! { <p class="field-error">{message}</p> })}
            </label>

            <button type="submit" class="primary-btn">"Send message"</button>
        </form>
    }
}
