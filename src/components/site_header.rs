//! Site Header Component
//!
//! Logo, navigation, sign-in and the basket button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Page;
use crate::store::{use_basket_store, BasketStateStoreFields};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_basket_store();

    let (org_name, org_logo) = ctx.config.with_value(|c| (c.org_name.clone(), c.org_logo.clone()));
    let basket_count = move || store.items().with(|items| items.len());

    view! {
        <header class="site-header">
            <button class="site-brand" on:click=move |_| ctx.go_to(Page::Calendar)>
                <img src=org_logo class="site-logo" alt=format!("{} Logo", org_name) />
                <span class="site-title">{org_name.clone()}</span>
            </button>

            <nav class="site-nav">
                {Page::NAV.iter().map(|page| {
                    let page = *page;
                    view! {
                        <button
                            class=move || if ctx.page.get() == page { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| ctx.go_to(page)
                        >
                            {page.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="site-actions">
                {move || match ctx.signed_in.get() {
                    Some(email) => view! {
                        <span class="signed-in" title=email.clone()>"Signed in"</span>
                        <button class="text-btn" on:click=move |_| ctx.signed_in.set(None)>"Sign out"</button>
                    }.into_any(),
                    None => view! {
                        <button class="text-btn" on:click=move |_| ctx.open_sign_in()>"Sign in"</button>
                    }.into_any(),
                }}
                <button class="basket-btn" on:click=move |_| ctx.open_basket()>
                    "Basket"
                    <Show when=move || { basket_count() > 0 }>
                        <span class="basket-count">{basket_count}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}
