//! Basket Drawer Component
//!
//! Slide-in list of basket lines with totals and the way to checkout.

use booking_core::{basket_total, format_money, BasketItem};
use leptos::prelude::*;
use tracing::info;

use crate::components::RemoveConfirmButton;
use crate::context::AppContext;
use crate::models::Page;
use crate::store::{store_remove_item, use_basket_store, BasketStateStoreFields};

#[component]
pub fn BasketDrawer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_basket_store();
    let currency = ctx.currency();

    let subtotal = {
        let currency = currency.clone();
        move || format_money(&currency, store.items().with(|items| basket_total(items)))
    };
    let is_empty = move || store.items().with(|items| items.is_empty());

    view! {
        <Show when=move || ctx.basket_open.get()>
            <div class="drawer-backdrop" on:click=move |_| ctx.close_basket()></div>
        </Show>
        <aside class=move || if ctx.basket_open.get() { "basket-drawer open" } else { "basket-drawer" }>
            <div class="drawer-header">
                <h2 class="heading">"Basket"</h2>
                <button class="close-btn" on:click=move |_| ctx.close_basket()>"✕"</button>
            </div>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty-basket">"Your basket is empty"</p> }
            >
                <ul class="basket-lines">
                    <For
                        each=move || store.items().get()
                        key=|item| item.id.clone()
                        children={
                            let currency = currency.clone();
                            move |item: BasketItem| view! { <BasketLine item=item currency=currency.clone() /> }
                        }
                    />
                </ul>
                <div class="basket-subtotal">
                    <span>"Subtotal"</span>
                    <span>{subtotal.clone()}</span>
                </div>
                <button class="primary-btn block" on:click=move |_| ctx.go_to(Page::Checkout)>
                    "Checkout"
                </button>
            </Show>
        </aside>
    }
}

#[component]
fn BasketLine(item: BasketItem, currency: String) -> impl IntoView {
    let store = use_basket_store();
    let id = item.id.clone();
    let charge = format_money(&currency, item.amount());
    let billing = item.billing.clone();

    view! {
        <li class="basket-line">
            {item.image.clone().map(|src| view! { <img class="basket-line-image" src=src alt="" /> })}
            <div class="basket-line-body">
                <div class="heading">{item.title.clone()}</div>
                {item.sub_title.clone().map(|s| view! { <div class="sub-heading-xs">{s}</div> })}
                {item.dates.clone().map(|d| view! { <div class="sub-heading-xs">{d}</div> })}
                <div class="basket-line-charge">
                    {charge}
                    {billing.map(|b| view! { <span class="billing">" · " {b}</span> })}
                </div>
            </div>
            <RemoveConfirmButton
                title=item.title.clone()
                on_confirm=move |_| {
                    info!(line = %id, "removed from basket");
                    store_remove_item(&store, &id);
                }
            />
        </li>
    }
}
