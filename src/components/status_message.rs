//! Status Message Component
//!
//! Placeholder text shown while loading, on failure, or for empty results.

use leptos::prelude::*;

#[component]
pub fn StatusMessage(
    #[prop(into)] text: String,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let class = if error { "status-message error" } else { "status-message" };
    view! { <div class=class>{text}</div> }
}
