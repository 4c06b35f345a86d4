//! UI Components
//!
//! Reusable Leptos components shared by the resource screens.

mod delete_confirm_button;
mod empty_state;
mod header;
mod row_actions;
mod sidebar;
mod spinner;
mod status_badge;
mod toasts;

pub use delete_confirm_button::DeleteConfirmButton;
pub use empty_state::EmptyState;
pub use header::Header;
pub use row_actions::RowActions;
pub use sidebar::Sidebar;
pub use spinner::{RowSpinner, SectionSpinner};
pub use status_badge::{PriceBadge, StatusBadge};
pub use toasts::ToastHost;
