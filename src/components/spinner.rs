//! Loading Spinners
//!
//! Collection-level and row-level loading indicators are visually distinct:
//! the section spinner blocks a whole list, the row spinner replaces one
//! row's action controls.

use leptos::prelude::*;

/// Full-section spinner shown while a collection loads.
#[component]
pub fn SectionSpinner() -> impl IntoView {
    view! {
        <div class="section-spinner">
            <span class="spinner"></span>
            <span>"Loading..."</span>
        </div>
    }
}

/// Small inline spinner replacing a row's action icons.
#[component]
pub fn RowSpinner() -> impl IntoView {
    view! { <span class="spinner small" title="Working..."></span> }
}
