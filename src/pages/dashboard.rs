//! Dashboard Screen
//!
//! Headline counts plus the most recent enrollments with a revenue total.
//! All reshaping happens client-side; chart rendering is out of scope.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, revenue_total};
use crate::components::SectionSpinner;
use crate::context::use_app_context;
use crate::models::{DashboardStats, Enrollment};

const RECENT_LIMIT: usize = 8;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    let (stats, set_stats) = signal(DashboardStats::default());
    let (recent, set_recent) = signal(Vec::<Enrollment>::new());
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::get_dashboard_stats().await {
                Ok(s) => set_stats.set(s),
                Err(e) => ctx.notify.error(e.user_message()),
            }
            match api::list_enrollments(&Default::default()).await {
                Ok(mut enrollments) => {
                    enrollments.truncate(RECENT_LIMIT);
                    set_recent.set(enrollments);
                }
                Err(e) => ctx.notify.error(e.user_message()),
            }
            set_loading.set(false);
        });
    });

    let revenue = Memo::new(move |_| revenue_total(&recent.get()));

    view! {
        <section class="page dashboard-page">
            <Show when=move || loading.get()>
                <SectionSpinner/>
            </Show>

            <Show when=move || !loading.get()>
                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-value">{move || stats.get().courses}</span>
                        <span class="stat-label">"Courses"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || stats.get().ebooks}</span>
                        <span class="stat-label">"E-Books"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || stats.get().jobs}</span>
                        <span class="stat-label">"Jobs"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || stats.get().categories}</span>
                        <span class="stat-label">"Categories"</span>
                    </div>
                </div>

                <h2>"Recent enrollments"</h2>
                <p class="revenue-total">
                    {move || format!("Recent revenue: ${:.2}", revenue.get())}
                </p>
                <table class="resource-table">
                    <thead>
                        <tr>
                            <th>"Student"</th>
                            <th>"Course"</th>
                            <th>"Amount"</th>
                            <th>"Enrolled"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || recent.get()
                            key=|e: &Enrollment| e.id
                            children=move |enrollment| {
                                view! {
                                    <tr>
                                        <td>{enrollment.student_name}</td>
                                        <td>{enrollment.course_title}</td>
                                        <td>{format!("${:.2}", enrollment.amount)}</td>
                                        <td>{enrollment.enrolled_at.format("%Y-%m-%d").to_string()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || recent.get().is_empty()>
                    <div class="empty-state">"No enrollments yet"</div>
                </Show>
            </Show>
        </section>
    }
}
