//! Jobs Screen
//!
//! JSON resource with a modal create/edit form. Search is client-side over
//! title and company.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::FormTarget;
use crate::api::{self, JobGateway, JobPayload};
use crate::components::{EmptyState, RowActions, SectionSpinner, StatusBadge};
use crate::context::use_app_context;
use crate::controller::ResourceController;
use crate::models::{matches_search, Job, ResourceId};

const JOB_TYPES: &[&str] = &["full-time", "part-time", "contract", "internship"];

#[component]
pub fn JobsPage() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl: ResourceController<JobGateway> = ResourceController::new(ctx.notify);
    ctrl.mount();

    let (search, set_search) = signal(String::new());
    let visible = Memo::new(move |_| {
        let needle = search.get();
        ctrl.items
            .get()
            .into_iter()
            .filter(|j| matches_search(&j.title, &needle) || matches_search(&j.company, &needle))
            .collect::<Vec<_>>()
    });

    // Modal form state
    let (form_target, set_form_target) = signal::<FormTarget>(None);
    let (title, set_title) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (job_type, set_job_type) = signal(String::from("full-time"));
    let (salary, set_salary) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let open_create = move |_| {
        set_title.set(String::new());
        set_company.set(String::new());
        set_location.set(String::new());
        set_job_type.set(String::from("full-time"));
        set_salary.set(String::new());
        set_form_target.set(Some(None));
    };

    // Edit re-fetches the job so the form never starts from a stale row.
    let open_edit = move |id: ResourceId| {
        spawn_local(async move {
            match api::get_job(id).await {
                Ok(job) => {
                    set_title.set(job.title);
                    set_company.set(job.company);
                    set_location.set(job.location);
                    set_job_type.set(job.job_type);
                    set_salary.set(job.salary_range.unwrap_or_default());
                    set_form_target.set(Some(Some(id)));
                }
                Err(e) => {
                    set_form_target.set(None);
                    ctx.notify.error(e.user_message());
                }
            }
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let salary_range = {
            let s = salary.get();
            if s.trim().is_empty() { None } else { Some(s.trim().to_string()) }
        };
        let payload = JobPayload {
            title: title.get(),
            company: company.get(),
            location: location.get(),
            job_type: job_type.get(),
            salary_range,
        };
        if let Err(message) = payload.validate() {
            ctx.notify.error(message);
            return;
        }
        set_saving.set(true);
        let settled = move |ok: bool| {
            set_saving.set(false);
            if ok {
                set_form_target.set(None);
            }
        };
        match form_target.get() {
            Some(Some(id)) => ctrl.update(id, payload, settled),
            Some(None) => ctrl.create(payload, settled),
            None => {}
        }
    };

    view! {
        <section class="page jobs-page">
            <div class="page-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search jobs..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button class="primary-btn" on:click=open_create>"+ New Job"</button>
            </div>

            <Show when=move || form_target.get().is_some()>
                <div class="modal-backdrop">
                    <form class="modal job-form" on:submit=submit>
                        <h2>
                            {move || if form_target.get() == Some(None) { "New Job" } else { "Edit Job" }}
                        </h2>
                        <input
                            type="text"
                            placeholder="Title"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Company"
                            prop:value=move || company.get()
                            on:input=move |ev| set_company.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Location"
                            prop:value=move || location.get()
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                        />
                        <select
                            prop:value=move || job_type.get()
                            on:change=move |ev| set_job_type.set(event_target_value(&ev))
                        >
                            {JOB_TYPES.iter().map(|t| view! {
                                <option value=*t selected=move || job_type.get() == *t>{*t}</option>
                            }).collect_view()}
                        </select>
                        <input
                            type="text"
                            placeholder="Salary range (optional)"
                            prop:value=move || salary.get()
                            on:input=move |ev| set_salary.set(event_target_value(&ev))
                        />
                        <div class="modal-actions">
                            <button type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| set_form_target.set(None)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || ctrl.collection_loading.get()>
                <SectionSpinner/>
            </Show>

            <Show when=move || !ctrl.collection_loading.get()>
                <table class="resource-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Company"</th>
                            <th>"Location"</th>
                            <th>"Type"</th>
                            <th>"Salary"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            // Key on content so patched rows re-render.
                            key=|job: &Job| format!("{:?}", job)
                            children=move |job| {
                                let id = job.id;
                                let active = job.is_active;
                                view! {
                                    <tr>
                                        <td>{job.title}</td>
                                        <td>{job.company}</td>
                                        <td>{job.location}</td>
                                        <td>{job.job_type}</td>
                                        <td>{job.salary_range.unwrap_or_else(|| "—".to_string())}</td>
                                        <td><StatusBadge active=active/></td>
                                        <td>
                                            <RowActions
                                                id=id
                                                row_action=ctrl.row_action
                                                active=active
                                                on_edit=Callback::new(move |_| open_edit(id))
                                                on_toggle=Callback::new(move |_| ctrl.toggle_status(id))
                                                on_delete=Callback::new(move |_| ctrl.delete(id))
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || visible.get().is_empty()>
                    <EmptyState
                        collection_empty=Signal::derive(move || ctrl.items.get().is_empty())
                        resource_name="jobs"
                    />
                </Show>
            </Show>
        </section>
    }
}
