//! Sidebar Navigation Component

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::store::{toggle_sidebar, use_ui_store, UiStateStoreFields};

fn icon(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "📊",
        Page::Categories => "🗂",
        Page::Courses => "🎓",
        Page::Ebooks => "📚",
        Page::Jobs => "💼",
        Page::Shorts => "🎬",
        Page::Enrollments => "🧾",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let sidebar_class = move || {
        if ui.sidebar_collapsed().get() {
            "sidebar collapsed"
        } else {
            "sidebar"
        }
    };

    view! {
        <aside class=sidebar_class>
            <div class="sidebar-logo">
                <Show when=move || !ui.sidebar_collapsed().get()>
                    <span class="logo-text">"LMS Admin"</span>
                </Show>
                <button class="collapse-btn" title="Toggle sidebar" on:click=move |_| toggle_sidebar(&ui)>
                    {move || if ui.sidebar_collapsed().get() { "»" } else { "«" }}
                </button>
            </div>

            <nav class="sidebar-nav">
                {Page::ALL.iter().map(|&page| {
                    let is_current = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_current() { "nav-item active" } else { "nav-item" }
                            title=page.title()
                            on:click=move |_| ctx.navigate(page)
                        >
                            <span class="nav-icon">{icon(page)}</span>
                            <Show when=move || !ui.sidebar_collapsed().get()>
                                <span class="nav-label">{page.title()}</span>
                            </Show>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
