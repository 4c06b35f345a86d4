//! Enrollments Screen
//!
//! Read-only listing with server-side filtering by student search and
//! course, plus a client-side revenue total over the visible rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, revenue_total, EnrollmentGateway};
use crate::components::{EmptyState, SectionSpinner};
use crate::context::use_app_context;
use crate::controller::ResourceController;
use crate::models::{Course, Enrollment, ResourceId};

#[component]
pub fn EnrollmentsPage() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl: ResourceController<EnrollmentGateway> = ResourceController::new(ctx.notify);
    ctrl.mount();

    // Courses for the filter select.
    let (courses, set_courses) = signal(Vec::<Course>::new());
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_courses(&Default::default()).await {
                Ok(list) => set_courses.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[enrollments] courses load failed: {}", e).into(),
                    );
                }
            }
        });
    });

    let total = Memo::new(move |_| revenue_total(&ctrl.items.get()));

    view! {
        <section class="page enrollments-page">
            <div class="page-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search students..."
                    prop:value=move || ctrl.filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.set_filters(|f| f.search = value);
                    }
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctrl.set_filters(|f| f.course_id = value.parse::<ResourceId>().ok());
                }>
                    <option value="">"All courses"</option>
                    <For
                        each=move || courses.get()
                        key=|c| c.id
                        children=move |c| view! { <option value=c.id.to_string()>{c.title}</option> }
                    />
                </select>
                <span class="revenue-total">
                    {move || format!("Revenue: ${:.2}", total.get())}
                </span>
            </div>

            <Show when=move || ctrl.collection_loading.get()>
                <SectionSpinner/>
            </Show>

            <Show when=move || !ctrl.collection_loading.get()>
                <table class="resource-table">
                    <thead>
                        <tr>
                            <th>"Student"</th>
                            <th>"Email"</th>
                            <th>"Course"</th>
                            <th>"Amount"</th>
                            <th>"Enrolled"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || ctrl.items.get()
                            key=|e: &Enrollment| e.id
                            children=move |enrollment| {
                                view! {
                                    <tr>
                                        <td>{enrollment.student_name}</td>
                                        <td>{enrollment.student_email}</td>
                                        <td>{enrollment.course_title}</td>
                                        <td>{format!("${:.2}", enrollment.amount)}</td>
                                        <td>{enrollment.enrolled_at.format("%Y-%m-%d").to_string()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || ctrl.items.get().is_empty()>
                    <EmptyState
                        collection_empty=Signal::derive(move || {
                            ctrl.filters.get() == Default::default()
                        })
                        resource_name="enrollments"
                    />
                </Show>
            </Show>
        </section>
    }
}
