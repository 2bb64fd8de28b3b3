//! Remove Confirm Button Component
//!
//! Asks before a basket line is dropped. The line's title is named in both
//! the button label and the question.

use leptos::prelude::*;

/// Button label and confirmation question for a basket line
fn remove_prompts(title: &str) -> (String, String) {
    (format!("Remove {}", title), format!("Remove {} from your basket?", title))
}

#[component]
pub fn RemoveConfirmButton(
    /// Title of the basket line
    #[prop(into)]
    title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let (label, question) = remove_prompts(&title);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    type="button"
                    class="remove-btn"
                    aria-label=label.clone()
                    on:click=move |_| set_asking.set(true)
                >
                    "Remove"
                </button>
            }
        >
            <div class="remove-confirm" role="alertdialog" aria-label=question.clone()>
                <p class="sub-heading-xs">{question.clone()}</p>
                <button type="button" class="text-btn danger" on:click=move |_| on_confirm.run(())>
                    "Yes, remove"
                </button>
                <button type="button" class="text-btn" on:click=move |_| set_asking.set(false)>
                    "Keep"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_name_the_line() {
        let (label, question) = remove_prompts("Bubble the Seahorse");
        assert_eq!(label, "Remove Bubble the Seahorse");
        assert_eq!(question, "Remove Bubble the Seahorse from your basket?");
    }
}
