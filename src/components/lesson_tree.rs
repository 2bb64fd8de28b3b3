//! Lesson Tree Component
//!
//! Checkable catalogue tree; categories expand and check all their lessons.

use std::collections::HashSet;

use booking_core::catalogue::{CheckState, TreeSelection};
use leptos::prelude::*;

use crate::models::CatalogueRow;
use crate::tree::catalogue_rows;

#[component]
pub fn LessonTree(selection: RwSignal<TreeSelection>) -> impl IntoView {
    let (expanded, set_expanded) = signal(HashSet::<String>::new());
    let rows = move || expanded.with(catalogue_rows);

    view! {
        <div class="lesson-tree">
            <For
                each=rows
                key=|(row, depth)| (row.key.clone(), *depth)
                children=move |(row, depth)| view! {
                    <LessonTreeRow row=row depth=depth selection=selection expanded=expanded set_expanded=set_expanded />
                }
            />
        </div>
    }
}

/// A single row in the tree
#[component]
fn LessonTreeRow(
    row: CatalogueRow,
    depth: usize,
    selection: RwSignal<TreeSelection>,
    expanded: ReadSignal<HashSet<String>>,
    set_expanded: WriteSignal<HashSet<String>>,
) -> impl IntoView {
    let key = row.key.clone();
    let indent = depth * 24;
    let check_state = {
        let key = key.clone();
        move || selection.with(|s| s.check_state(&key))
    };
    let is_expanded = {
        let key = key.clone();
        move || expanded.with(|e| e.contains(&key))
    };
    let toggle_expanded = {
        let key = key.clone();
        move |_| {
            set_expanded.update(|e| {
                if !e.remove(&key) {
                    e.insert(key.clone());
                }
            })
        }
    };

    view! {
        <div class=format!("tree-row tone-{}", row.tone) style=format!("margin-left: {}px;", indent)>
            // Collapse toggle
            {if row.is_category() {
                view! {
                    <button class="collapse-btn" on:click=toggle_expanded>
                        {move || if is_expanded() { "▼" } else { "▶" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            <input
                type="checkbox"
                prop:checked={
                    let check_state = check_state.clone();
                    move || check_state() == CheckState::Checked
                }
                prop:indeterminate=move || check_state() == CheckState::Indeterminate
                on:change=move |_| selection.update(|s| s.toggle(&key))
            />

            <span class="tree-title">{row.title}</span>
            {row.is_category().then(|| view! { <span class="tree-count">{row.child_count}</span> })}
        </div>
    }
}
