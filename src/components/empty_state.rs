//! Empty State Component
//!
//! Zero items total and zero items matching a filter are different
//! situations and get different messages.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    /// True when the unfiltered collection itself is empty.
    #[prop(into)] collection_empty: Signal<bool>,
    #[prop(into)] resource_name: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            {move || {
                if collection_empty.get() {
                    format!("No {} yet", resource_name)
                } else {
                    format!("No {} match the current filter", resource_name)
                }
            }}
        </div>
    }
}
