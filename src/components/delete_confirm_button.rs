//! Delete Confirm Button Component
//!
//! Inline delete confirmation. Destructive intent must always be confirmed
//! before the gateway is called, so the plain button first swaps to a
//! confirm/cancel pair.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `disabled` - hard guard, true while any row action is in flight
/// * `on_confirm` - callback run only after the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="action-btn delete"
                title="Delete"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "🗑"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
