//! Global UI Preferences Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only transient
//! chrome state lives here (theme, sidebar); resource collections are owned
//! per-screen by their controllers.

use leptos::prelude::*;
use reactive_stores::Store;

/// App chrome state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Dark theme enabled
    pub dark: bool,
    /// Sidebar collapsed to icons only
    pub sidebar_collapsed: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Flip the theme
pub fn toggle_theme(store: &UiStore) {
    let current = store.dark().get_untracked();
    store.dark().set(!current);
}

/// Flip sidebar collapse
pub fn toggle_sidebar(store: &UiStore) {
    let current = store.sidebar_collapsed().get_untracked();
    store.sidebar_collapsed().set(!current);
}
