//! Toast Host Component
//!
//! Renders the transient notification queue. Toasts auto-dismiss; clicking
//! one dismisses it early.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastLevel};

#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_app_context().notify;
    let toasts = notify.toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        ToastLevel::Success => "toast success",
                        ToastLevel::Error => "toast error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| notify.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
