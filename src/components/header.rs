//! Header Component
//!
//! Page title plus the theme toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{toggle_theme, use_ui_store, UiStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    view! {
        <header class="header">
            <h1>{move || ctx.page.get().title()}</h1>
            <button
                class="theme-btn"
                title=move || if ui.dark().get() { "Switch to light" } else { "Switch to dark" }
                on:click=move |_| toggle_theme(&ui)
            >
                {move || if ui.dark().get() { "☀" } else { "🌙" }}
            </button>
        </header>
    }
}
