//! Category List Component
//!
//! Left sidebar of categories. Exactly one entry is highlighted.

use leptos::prelude::*;

use crate::catalog::CategoryEntry;
use crate::components::StatusMessage;
use crate::context::use_shop;
use crate::loading::LoadState;
use crate::store::ShopStateStoreFields;

#[component]
fn CategoryItem(entry: CategoryEntry) -> impl IntoView {
    let ctx = use_shop();
    let filter = entry.filter;
    let is_selected = move || ctx.store.selected_category().get() == filter;

    view! {
        <li
            class=move || if is_selected() { "category-item active" } else { "category-item" }
            on:click=move |_| ctx.select_category(filter)
        >
            {entry.label}
        </li>
    }
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_shop();

    let entries = move || {
        ctx.store.categories().with(|state| match state {
            LoadState::Ready(entries) => Ok(entries.clone()),
            LoadState::Loading => Err((String::from("Loading..."), false)),
            LoadState::Failed(msg) => Err((format!("Could not load categories: {}", msg), true)),
        })
    };

    view! {
        <aside class="category-column">
            <h2 class="category-column-header">"Categories"</h2>
            {move || match entries() {
                Ok(entries) => view! {
                    <ul class="category-list">
                        <For
                            each=move || entries.clone()
                            key=|entry| entry.filter
                            children=move |entry| view! { <CategoryItem entry=entry /> }
                        />
                    </ul>
                }.into_any(),
                Err((text, error)) => view! { <StatusMessage text=text error=error /> }.into_any(),
            }}
        </aside>
    }
}
