//! Product Page Component
//!
//! Purchase option, session date and participants for the featured lesson.

use booking_core::product::{
    drawer_dates, featured_media, featured_product, main_grid_dates, ProductSelection, PurchaseOption,
};
use booking_core::{format_money, Participant};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use tracing::info;

use crate::components::ProductMedia;
use crate::context::AppContext;
use crate::store::{store_add_item, store_next_line_id, use_basket_store};

/// How long the "Added" confirmation stays on the button
const ADDED_FEEDBACK_MS: u32 = 4_000;

#[component]
pub fn ProductPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_basket_store();
    let currency = ctx.currency();
    let product = StoredValue::new(featured_product());
    let participants = ctx.config.with_value(|c| c.participants.clone());
    let has_participants = !participants.is_empty();

    let selection = RwSignal::new(ProductSelection::default());
    let attending = RwSignal::new(Vec::<u32>::new());
    let (dates_open, set_dates_open) = signal(false);
    let (added, set_added) = signal(false);

    // Closing the basket ends the "Added" state early
    Effect::new(move |_| {
        if !ctx.basket_open.get() {
            set_added.set(false);
        }
    });

    let add_to_basket = {
        let participants = participants.clone();
        move |_| {
            let ids = attending.get_untracked();
            let mut item = selection.with_untracked(|s| {
                product.with_value(|p| s.to_basket_item(p, store_next_line_id(&store, &p.id)))
            });
            item.participants = participants.iter().filter(|p| ids.contains(&p.id)).cloned().collect();
            info!(line = %item.id, title = %item.title, "added to basket");
            store_add_item(&store, item);

            set_added.set(true);
            Timeout::new(ADDED_FEEDBACK_MS, move || set_added.set(false)).forget();
            ctx.open_basket();
        }
    };

    let (title, sub_title, price, cost) = product.with_value(|p| {
        (
            p.title.clone(),
            p.sub_title.clone().unwrap_or_default(),
            p.price.clone().unwrap_or_default(),
            p.cost.clone().unwrap_or_default(),
        )
    });

    view! {
        <div class="product-page">
            <ProductMedia media=featured_media() />
            <h1 class="heading-lg">{title}</h1>
            <h3 class="sub-heading">{sub_title.clone()}</h3>

            <section>
                <div class="heading">"Purchase options"</div>
                <div class="option-group">
                    <PurchaseOptionButton
                        option=PurchaseOption::Block
                        label=format!("Monthly · {}", cost)
                        detail=sub_title
                        selection=selection
                    />
                    <PurchaseOptionButton
                        option=PurchaseOption::Single
                        label=format!("Session · {}", price)
                        detail="Single session on a Tuesday"
                        selection=selection
                    />
                </div>
            </section>

            <section>
                <div class="heading">"Select a date"</div>
                <div class="date-grid">
                    {main_grid_dates().into_iter().map(|date| {
                        let value = date.value.clone();
                        let is_selected = {
                            let value = value.clone();
                            move || selection.with(|s| s.date == value)
                        };
                        view! {
                            <button
                                class=move || if is_selected() { "date-btn active" } else { "date-btn" }
                                on:click=move |_| selection.update(|s| s.select_date(&value))
                            >
                                {date.label}
                            </button>
                        }
                    }).collect_view()}
                    {move || match selection.with(|s| s.drawer_pick()) {
                        Some(label) => view! {
                            <button class="date-btn active" on:click=move |_| set_dates_open.set(true)>
                                "📅 " {label}
                            </button>
                        }.into_any(),
                        None => view! {
                            <button class="date-btn" on:click=move |_| set_dates_open.set(true)>"More dates..."</button>
                        }.into_any(),
                    }}
                </div>
            </section>

            <Show when=move || has_participants>
                <section>
                    <div class="heading">"Who is attending?"</div>
                    {participants.iter().map(|participant| view! {
                        <ParticipantCheckbox participant=participant.clone() attending=attending />
                    }).collect_view()}
                </section>
            </Show>

            <div class="basket-bar">
                <Show
                    when=move || selection.with(|s| s.can_add_to_basket())
                    fallback=|| view! {
                        <div class="no-spaces">"⚠ No spaces available"</div>
                    }
                >
                    <button
                        class=move || if added.get() { "primary-btn block added" } else { "primary-btn block" }
                        disabled=move || added.get()
                        on:click=add_to_basket.clone()
                    >
                        {move || if added.get() { "Added" } else { "Add to basket" }}
                    </button>
                </Show>
                <p class="sub-heading-xs">
                    {move || selection.with(|s| {
                        let charge = product.with_value(|p| s.to_basket_item(p, "preview").amount());
                        format!("{} today. Final cost at checkout may vary depending on the time or date of purchase.", format_money(&currency, charge))
                    })}
                </p>
            </div>

            <Show when=move || dates_open.get()>
                <div class="drawer-backdrop" on:click=move |_| set_dates_open.set(false)></div>
                <aside class="dates-drawer open">
                    <div class="drawer-header">
                        <h2 class="heading">"Select a date"</h2>
                        <button class="close-btn" on:click=move |_| set_dates_open.set(false)>"✕"</button>
                    </div>
                    <div class="date-grid">
                        {drawer_dates().into_iter().map(|date| {
                            let value = date.value.clone();
                            view! {
                                <button
                                    class="date-btn"
                                    on:click=move |_| {
                                        selection.update(|s| s.select_date(&value));
                                        set_dates_open.set(false);
                                    }
                                >
                                    {date.label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </aside>
            </Show>
        </div>
    }
}

#[component]
fn PurchaseOptionButton(
    option: PurchaseOption,
    #[prop(into)] label: String,
    #[prop(into)] detail: String,
    selection: RwSignal<ProductSelection>,
) -> impl IntoView {
    let is_selected = move || selection.with(|s| s.option == option);

    view! {
        <button
            class=move || if is_selected() { "option-btn active" } else { "option-btn" }
            on:click=move |_| selection.update(|s| s.option = option)
        >
            <div class="heading">{label}</div>
            <Show when=is_selected>
                <div class="sub-heading-xs">{detail.clone()}</div>
            </Show>
        </button>
    }
}

#[component]
fn ParticipantCheckbox(participant: Participant, attending: RwSignal<Vec<u32>>) -> impl IntoView {
    let id = participant.id;

    view! {
        <label class="checkbox-row">
            <input
                type="checkbox"
                prop:checked=move || attending.with(|ids| ids.contains(&id))
                on:change=move |_| attending.update(|ids| {
                    match ids.iter().position(|i| *i == id) {
                        Some(index) => {
                            ids.remove(index);
                        }
                        None => ids.push(id),
                    }
                })
            />
            {participant.full_name()}
        </label>
    }
}
