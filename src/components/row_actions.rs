//! Row Actions Component
//!
//! Edit / toggle-status / delete cluster for one table row. While any row's
//! action is in flight every control is disabled (not just spinning) so a
//! second click cannot start a concurrent mutation; the busy row shows a
//! spinner instead of its icons.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, RowSpinner};
use crate::models::ResourceId;

#[component]
pub fn RowActions(
    id: ResourceId,
    /// Id of the row whose mutation is in flight, if any.
    #[prop(into)] row_action: Signal<Option<ResourceId>>,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let busy_here = move || row_action.get() == Some(id);
    let busy_anywhere = Signal::derive(move || row_action.get().is_some());

    view! {
        <span class="row-actions">
            <Show when=move || busy_here()>
                <RowSpinner/>
            </Show>
            <Show when=move || !busy_here()>
                <button
                    class="action-btn edit"
                    title="Edit"
                    disabled=move || busy_anywhere.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(());
                    }
                >
                    "✎"
                </button>
                <button
                    class="action-btn toggle"
                    title=move || if active.get() { "Disable" } else { "Enable" }
                    disabled=move || busy_anywhere.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_toggle.run(());
                    }
                >
                    {move || if active.get() { "⏸" } else { "▶" }}
                </button>
                <DeleteConfirmButton disabled=busy_anywhere on_confirm=on_delete/>
            </Show>
        </span>
    }
}
