//! Application Context
//!
//! Shared state provided via Leptos Context API. Components declare their
//! dependencies on navigation and notifications explicitly through this
//! struct instead of reaching for ambient globals.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toast auto-dismiss delay.
const TOAST_MS: u32 = 4000;

/// Admin screens. Navigation is an in-memory switch; nothing persists across
/// page reloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Categories,
    Courses,
    Ebooks,
    Jobs,
    Shorts,
    Enrollments,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Categories => "Categories",
            Page::Courses => "Courses",
            Page::Ebooks => "E-Books",
            Page::Jobs => "Jobs",
            Page::Shorts => "Shorts",
            Page::Enrollments => "Enrollments",
        }
    }

    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Categories,
        Page::Courses,
        Page::Ebooks,
        Page::Jobs,
        Page::Shorts,
        Page::Enrollments,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Handle for surfacing transient, non-blocking notifications. Copy so it
/// can move freely into async blocks.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.enqueue(level, message);
        let me = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            // The app-level toast signal outlives every screen, but guard
            // anyway in case the whole app was torn down.
            me.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    fn enqueue(&self, level: ToastLevel, message: String) -> u32 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, level, message }));
        id
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// App-wide signals provided via context.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently shown screen - read
    pub page: ReadSignal<Page>,
    /// Currently shown screen - write
    set_page: WriteSignal<Page>,
    /// Toast queue handle
    pub notify: Notifier,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), notify: Notifier) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            notify,
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_enter_the_queue_as_error_toasts() {
        let notify = Notifier::new();
        notify.enqueue(ToastLevel::Error, "network error".to_string());
        notify.enqueue(ToastLevel::Success, "Created successfully".to_string());
        let toasts = notify.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].level, ToastLevel::Error);
        assert_eq!(toasts[0].message, "network error");
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let notify = Notifier::new();
        let first = notify.enqueue(ToastLevel::Error, "a".to_string());
        let second = notify.enqueue(ToastLevel::Success, "b".to_string());
        notify.dismiss(first);
        let toasts = notify.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, second);
    }
}
