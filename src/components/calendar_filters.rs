//! Calendar Filters Component
//!
//! Lesson calendar with its filter drawers. Filters are mirrored into the
//! address bar so a filtered view can be shared.

use booking_core::catalogue::TreeSelection;
use booking_core::filters::{
    sample_sessions, CalendarFilters, ClassSession, FilterDrawer, TimeOfDay, AGE_BOUNDS, COACHES, LEVELS, LOCATIONS,
};
use leptos::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;

use crate::components::LessonTree;
use crate::context::AppContext;
use crate::models::Page;

fn read_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn write_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let url = format!("?{}", query);
    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(err) = result {
        warn!(error = ?err, "could not update the address bar");
    }
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let filters = RwSignal::new(CalendarFilters::from_query(&read_query()));
    let selection = RwSignal::new(TreeSelection::default());
    let (open_drawer, set_open_drawer) = signal::<Option<FilterDrawer>>(None);

    // Keep the address bar in step with the filters
    Effect::new(move |_| {
        let query = filters.with(|f| f.to_query());
        debug!(%query, "filters changed");
        write_query(&query);
    });

    // Checked lessons become the class filter. An untouched tree leaves
    // classes restored from the address bar alone.
    Effect::new(move |prev: Option<()>| {
        let titles: Vec<String> = selection.with(|s| s.selected_titles().into_iter().map(str::to_string).collect());
        if prev.is_none() && titles.is_empty() {
            return;
        }
        filters.update(|f| f.classes = titles);
    });

    let sessions = move || {
        filters.with(|f| sample_sessions().into_iter().filter(|s| f.matches(s)).collect::<Vec<_>>())
    };

    let clear_all = move |_| {
        filters.update(|f| f.clear_all());
        selection.update(|s| s.clear());
    };

    view! {
        <div class="calendar-page">
            <aside class="calendar-filters">
                <div class="filters-header">
                    <h2 class="heading">"Filters"</h2>
                    <button class="text-btn" on:click=clear_all>"Clear all"</button>
                </div>

                <FilterSection title="Class" drawer=FilterDrawer::Class open_drawer=open_drawer set_open_drawer=set_open_drawer>
                    <LessonTree selection=selection />
                </FilterSection>

                <FilterSection title="Age" drawer=FilterDrawer::Age open_drawer=open_drawer set_open_drawer=set_open_drawer>
                    <AgeFilter filters=filters />
                </FilterSection>

                <FilterSection title="Location" drawer=FilterDrawer::Location open_drawer=open_drawer set_open_drawer=set_open_drawer>
                    {LOCATIONS.iter().map(|location| {
                        let location = *location;
                        view! {
                            <FilterCheckbox
                                label=location
                                checked=Signal::derive(move || filters.with(|f| f.locations.iter().any(|l| l == location)))
                                on_toggle=move || filters.update(|f| f.toggle_location(location))
                            />
                        }
                    }).collect_view()}
                    <div class="level-chips">
                        {LEVELS.iter().map(|level| {
                            let level = *level;
                            view! {
                                <FilterCheckbox
                                    label=format!("Level {}", level)
                                    checked=Signal::derive(move || filters.with(|f| f.levels.iter().any(|l| l == level)))
                                    on_toggle=move || filters.update(|f| f.toggle_level(level))
                                />
                            }
                        }).collect_view()}
                    </div>
                </FilterSection>

                <FilterSection title="Time of day" drawer=FilterDrawer::TimeOfDay open_drawer=open_drawer set_open_drawer=set_open_drawer>
                    {TimeOfDay::ALL.iter().map(|time| {
                        let time = *time;
                        view! {
                            <FilterCheckbox
                                label=time.label()
                                checked=Signal::derive(move || filters.with(|f| f.times_of_day.contains(&time)))
                                on_toggle=move || filters.update(|f| f.toggle_time_of_day(time))
                            />
                        }
                    }).collect_view()}
                </FilterSection>

                <FilterSection title="Coach" drawer=FilterDrawer::Coach open_drawer=open_drawer set_open_drawer=set_open_drawer>
                    {COACHES.iter().map(|coach| {
                        let coach = *coach;
                        view! {
                            <FilterCheckbox
                                label=coach
                                checked=Signal::derive(move || filters.with(|f| f.coaches.iter().any(|c| c == coach)))
                                on_toggle=move || filters.update(|f| f.toggle_coach(coach))
                            />
                        }
                    }).collect_view()}
                </FilterSection>
            </aside>

            <section class="calendar-sessions">
                <p class="sub-heading">{move || format!("{} classes", sessions().len())}</p>
                <For
                    each=sessions
                    key=|session| session.title.clone()
                    children=|session| view! { <SessionCard session=session /> }
                />
            </section>
        </div>
    }
}

/// Collapsible filter group; opening one closes the others
#[component]
fn FilterSection(
    #[prop(into)] title: String,
    drawer: FilterDrawer,
    open_drawer: ReadSignal<Option<FilterDrawer>>,
    set_open_drawer: WriteSignal<Option<FilterDrawer>>,
    children: ChildrenFn,
) -> impl IntoView {
    let is_open = move || open_drawer.get() == Some(drawer);

    view! {
        <div class=move || if is_open() { "filter-section open" } else { "filter-section" }>
            <button
                class="filter-section-header"
                on:click=move |_| set_open_drawer.update(|open| {
                    *open = if *open == Some(drawer) { None } else { Some(drawer) };
                })
            >
                {title}
                <span>{move || if is_open() { "−" } else { "+" }}</span>
            </button>
            <Show when=is_open>
                <div class="filter-section-body">{children()}</div>
            </Show>
        </div>
    }
}

#[component]
fn FilterCheckbox(
    #[prop(into)] label: String,
    checked: Signal<bool>,
    on_toggle: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <label class="filter-checkbox">
            <input type="checkbox" prop:checked=move || checked.get() on:change=move |_| on_toggle() />
            {label}
        </label>
    }
}

#[component]
fn AgeFilter(filters: RwSignal<CalendarFilters>) -> impl IntoView {
    let (lo, hi) = AGE_BOUNDS;
    let set_bound = move |index: usize, value: String| {
        let Ok(value) = value.parse::<u8>() else {
            return;
        };
        filters.update(|f| {
            let (min, max) = f.age;
            if index == 0 {
                f.set_age(value, max);
            } else {
                f.set_age(min, value);
            }
        });
    };

    view! {
        <div class="age-filter">
            <p class="heading">{move || filters.with(|f| f.age_label())}</p>
            <input
                type="range"
                min=lo.to_string()
                max=hi.to_string()
                prop:value=move || filters.with(|f| f.age.0).to_string()
                on:input=move |ev| set_bound(0, event_target_value(&ev))
            />
            <input
                type="range"
                min=lo.to_string()
                max=hi.to_string()
                prop:value=move || filters.with(|f| f.age.1).to_string()
                on:input=move |ev| set_bound(1, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn SessionCard(session: ClassSession) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let bookable = session.title == "Bubble the Seahorse";
    let ages = if session.min_age == session.max_age {
        format!("{}+ years", session.min_age)
    } else {
        format!("{} to {} years", session.min_age, session.max_age)
    };

    view! {
        <article class="session-card">
            <div class="heading">{session.title.clone()}</div>
            <div class="sub-heading-xs">
                {format!(
                    "{} · Level {} · {} · {}",
                    session.location,
                    session.level,
                    TimeOfDay::from_hour(session.start_hour).label(),
                    ages,
                )}
            </div>
            <div class="session-coach">{session.coach.clone()}</div>
            <div class="session-price">{session.price.clone()}</div>
            <Show when=move || bookable>
                <button class="primary-btn" on:click=move |_| ctx.go_to(Page::Product)>"View"</button>
            </Show>
        </article>
    }
}
