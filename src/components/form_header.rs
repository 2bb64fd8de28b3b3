//! Form Header Component
//!
//! Title block at the top of every checkout step.

use leptos::prelude::*;

#[component]
pub fn FormHeader(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: Option<String>,
    #[prop(into, optional)] icon: Option<String>,
) -> impl IntoView {
    view! {
        <header class="form-header">
            {icon.map(|icon| view! { <span class="form-header-icon">{icon}</span> })}
            <div>
                <h2 class="heading">{title}</h2>
                {subtitle.map(|subtitle| view! { <p class="sub-heading">{subtitle}</p> })}
            </div>
        </header>
    }
}
