//! Sign In Modal Component
//!
//! Email first, then password, against the configured account directory.

use booking_core::account::{
    request_password_reset, InMemoryDirectory, SignInFlow, SignInOutcome, SignInStage, EMAIL_FIELD, PASSWORD_FIELD,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::context::AppContext;

#[component]
pub fn SignInModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let directory = StoredValue::new(InMemoryDirectory::new(ctx.config.with_value(|c| c.accounts.clone())));
    let (org_name, org_logo) = ctx.config.with_value(|c| (c.org_name.clone(), c.org_logo.clone()));

    let flow = RwSignal::new(SignInFlow::default());
    let (email_error, set_email_error) = signal::<Option<String>>(None);
    let (reset_open, set_reset_open) = signal(false);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let close = move || {
        flow.set(SignInFlow::default());
        set_email_error.set(None);
        set_reset_open.set(false);
        ctx.close_sign_in();
    };

    let on_continue = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut current = flow.get_untracked();
        let directory = directory.get_value();
        spawn_local(async move {
            let outcome = current.submit(&directory).await;
            match outcome {
                Ok(SignInOutcome::Invalid(errors)) => {
                    set_email_error.set(errors.message_for(EMAIL_FIELD).map(str::to_string));
                    flow.set(current);
                }
                Ok(SignInOutcome::SignedIn) => {
                    ctx.signed_in.set(Some(current.email.clone()));
                    close();
                }
                Ok(_) => {
                    set_email_error.set(None);
                    flow.set(current);
                }
                Err(err) => warn!(error = %err, "sign in failed"),
            }
        });
    };

    let on_reset = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match request_password_reset(&flow.with_untracked(|f| f.email.clone())) {
            Ok(message) => {
                set_notice.set(Some(message.to_string()));
                set_reset_open.set(false);
            }
            Err(errors) => set_email_error.set(errors.message_for(EMAIL_FIELD).map(str::to_string)),
        }
    };

    let stage = Memo::new(move |_| flow.with(|f| f.stage()));

    view! {
        <Show when=move || ctx.sign_in_open.get()>
            <div class="modal-backdrop" on:click=move |_| close()></div>
            <div class="modal sign-in-modal" role="dialog">
                <button class="close-btn" on:click=move |_| close()>"✕"</button>
                <img src=org_logo.clone() alt=format!("{} Logo", org_name) class="modal-logo" />

                <Show
                    when=move || !reset_open.get()
                    fallback=move || view! {
                        <form class="sign-in-form" on:submit=on_reset>
                            <h2 class="heading">"Reset password"</h2>
                            <p class="sub-heading">
                                "Enter the email address associated with your account and we'll send you a link to reset your password."
                            </p>
                            <EmailField flow=flow error=email_error />
                            <button type="submit" class="primary-btn block">"Reset password"</button>
                            <button type="button" class="text-btn" on:click=move |_| set_reset_open.set(false)>
                                "Back to sign in"
                            </button>
                        </form>
                    }
                >
                    <form class="sign-in-form" on:submit=on_continue>
                        <h2 class="heading">{move || flow.with(|f| f.heading())}</h2>
                        <p class="sub-heading">{move || flow.with(|f| f.prompt())}</p>

                        <EmailField flow=flow error=email_error />
                        <Show when=move || flow.with(|f| f.no_account())>
                            <p class="field-error">
                                "No account found. Try a different email or create an account."
                            </p>
                        </Show>

                        <Show when=move || stage.get() == SignInStage::Password>
                            <label class="field">
                                <input
                                    type="password"
                                    name=PASSWORD_FIELD
                                    placeholder="Password"
                                    prop:value=move || flow.with(|f| f.password.clone())
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        flow.update(|f| f.password = text);
                                    }
                                />
                            </label>
                            {move || flow.with(|f| f.password_error()).map(|message| view! {
                                <p class="field-error">{message}</p>
                            })}
                            <div class="sign-in-links">
                                <button type="button" class="text-btn" on:click=move |_| flow.update(|f| f.change_email())>
                                    "Use a different email"
                                </button>
                                <button type="button" class="text-btn" on:click=move |_| set_reset_open.set(true)>
                                    "Forgot password?"
                                </button>
                            </div>
                        </Show>

                        <button type="submit" class="primary-btn block">"Continue"</button>
                    </form>
                </Show>
            </div>
        </Show>
        {move || notice.get().map(|message| view! {
            <div class="toast" on:click=move |_| set_notice.set(None)>{message}</div>
        })}
    }
}

#[component]
fn EmailField(flow: RwSignal<SignInFlow>, error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <label class="field">
            <input
                type="email"
                name=EMAIL_FIELD
                placeholder="Email address"
                prop:value=move || flow.with(|f| f.email.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    flow.update(|f| f.email = text);
                }
            />
        </label>
        {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
    }
}
