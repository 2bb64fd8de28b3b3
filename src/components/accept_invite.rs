//! Accept Invite Component
//!
//! Step 1 of 2 for an invited player: create the account, then carry the
//! squad place into checkout.

use booking_core::account::{
    pending_invite, CreateAccountInvite, ACCEPT_TERMS_FIELD, NEW_PASSWORD_FIELD,
};
use booking_core::ValidationErrors;
use leptos::prelude::*;

use crate::components::FormHeader;
use crate::context::AppContext;
use crate::models::Page;
use crate::store::{store_add_item, store_remove_item, use_basket_store};

#[component]
pub fn AcceptInvite() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_basket_store();
    let form = RwSignal::new(CreateAccountInvite::new(pending_invite()));
    let (errors, set_errors) = signal(ValidationErrors::default());

    let invite = form.with_untracked(|f| f.invite.clone());
    let error_for = move |field: &'static str| {
        move || {
            errors.with(|e| e.message_for(field).map(str::to_string)).map(|message| {
                view! { <p class="field-error">{message}</p> }
            })
        }
    };

    let create_account = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (result, line) = form.with_untracked(|f| (f.submit(), f.invite.to_basket_item()));
        match result {
            Ok(account) => {
                set_errors.set(ValidationErrors::default());
                store_remove_item(&store, &line.id);
                store_add_item(&store, line);
                ctx.signed_in.set(Some(account.email));
                ctx.go_to(Page::Checkout);
            }
            Err(failed) => set_errors.set(failed),
        }
    };

    view! {
        <div class="accept-invite">
            <aside class="invite-progress">
                <div class="heading">
                    "Create a JoinIn account"
                    <span class="sub-heading-xs">" · Step 1 of 2"</span>
                </div>
                <ol class="progress-steps">
                    <li class="active">"Create account"</li>
                    <li>"Checkout"</li>
                </ol>
            </aside>

            <section class="invite-body">
                <FormHeader title=invite.email.clone() subtitle=invite.summary() icon="👤" />

                <div class="invite-card">
                    <img src=invite.image.clone() alt=format!("{} Photo", invite.squad) class="invite-image" />
                    <div>
                        <div class="heading">{invite.squad.clone()}</div>
                        <div class="sub-heading-xs">{invite.term.clone()}</div>
                        <div class="sub-heading-xs">{format!("{} · per month", invite.price)}</div>
                    </div>
                    <div class="invite-player">
                        <span class="sub-heading-xs">"Player · "</span>
                        <span class="heading">{invite.player.full_name()}</span>
                    </div>
                </div>

                <form class="invite-form" on:submit=create_account>
                    <label class="field">
                        <span>"Set password"</span>
                        <input
                            type="password"
                            name=NEW_PASSWORD_FIELD
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                form.update(|f| f.password = text);
                            }
                        />
                        {error_for(NEW_PASSWORD_FIELD)}
                    </label>

                    <label class="checkbox-row">
                        <input
                            type="checkbox"
                            name=ACCEPT_TERMS_FIELD
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.accept_terms = checked);
                            }
                        />
                        "I agree with the "
                        <a class="link" href="/terms" target="_blank">"Terms & Conditions"</a>
                    </label>
                    {error_for(ACCEPT_TERMS_FIELD)}

                    <label class="checkbox-row">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accept_marketing)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.accept_marketing = checked);
                            }
                        />
                        "Receive updates from JoinIn"
                    </label>

                    <button type="submit" class="primary-btn block">"Create account"</button>
                </form>
            </section>
        </div>
    }
}
