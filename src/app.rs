//! LMS Admin Frontend App
//!
//! Shell layout: sidebar navigation, header with theme toggle, the active
//! screen, and the toast host.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Header, Sidebar, ToastHost};
use crate::context::{AppContext, Notifier, Page};
use crate::pages::{
    CategoriesPage, CoursesPage, DashboardPage, EbooksPage, EnrollmentsPage, JobsPage, ShortsPage,
};
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Dashboard);
    let notify = Notifier::new();

    // Provide context to all children
    provide_context(AppContext::new((page, set_page), notify));
    provide_context(Store::new(UiState::default()));

    let ui = crate::store::use_ui_store();
    let layout_class = move || {
        if ui.dark().get() {
            "app-layout dark"
        } else {
            "app-layout"
        }
    };

    view! {
        <div class=layout_class>
            <Sidebar/>

            <div class="main-wrapper">
                <Header/>
                <main class="main-content">
                    // Each screen owns its state; switching pages unmounts the
                    // old one, which invalidates its in-flight requests.
                    {move || match page.get() {
                        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
                        Page::Categories => view! { <CategoriesPage/> }.into_any(),
                        Page::Courses => view! { <CoursesPage/> }.into_any(),
                        Page::Ebooks => view! { <EbooksPage/> }.into_any(),
                        Page::Jobs => view! { <JobsPage/> }.into_any(),
                        Page::Shorts => view! { <ShortsPage/> }.into_any(),
                        Page::Enrollments => view! { <EnrollmentsPage/> }.into_any(),
                    }}
                </main>
            </div>

            <ToastHost/>
        </div>
    }
}
