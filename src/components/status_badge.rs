//! Status Badges

use leptos::prelude::*;

use crate::models::PriceType;

/// Active/disabled pill.
#[component]
pub fn StatusBadge(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <span class=move || if active.get() { "badge active" } else { "badge disabled" }>
            {move || if active.get() { "Active" } else { "Disabled" }}
        </span>
    }
}

/// Free/paid pill.
#[component]
pub fn PriceBadge(price_type: PriceType) -> impl IntoView {
    let class = match price_type {
        PriceType::Free => "badge free",
        PriceType::Paid => "badge paid",
    };
    view! { <span class=class>{price_type.label()}</span> }
}
