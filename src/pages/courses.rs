//! Courses Screen
//!
//! Server-side filtering (search, category, price type, status) through the
//! controller's debounced reload, and a multipart create/edit form carrying
//! the thumbnail upload.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{selected_file, FormTarget};
use crate::api::{self, CourseForm, CourseGateway};
use crate::components::{EmptyState, PriceBadge, RowActions, SectionSpinner, StatusBadge};
use crate::context::use_app_context;
use crate::controller::ResourceController;
use crate::models::{Category, Course, PriceType, ResourceId};

#[component]
pub fn CoursesPage() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl: ResourceController<CourseGateway> = ResourceController::new(ctx.notify);
    ctrl.mount();

    // Categories for the filter and form selects. One fetch per screen life;
    // this screen owns its copy, no cross-screen cache.
    let (categories, set_categories) = signal(Vec::<Category>::new());
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[courses] categories load failed: {}", e).into(),
                    );
                }
            }
        });
    });

    let category_name = move |id: ResourceId| {
        categories
            .get()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "—".to_string())
    };

    // Form state
    let (form_target, set_form_target) = signal::<FormTarget>(None);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (paid, set_paid) = signal(false);
    let (form_category, set_form_category) = signal::<Option<ResourceId>>(None);
    let (instructor, set_instructor) = signal(String::new());
    // The modal is recreated on every open, so the input starts empty; the
    // file is only read from the node ref at submit time.
    let thumbnail_input: NodeRef<html::Input> = NodeRef::new();
    let (saving, set_saving) = signal(false);

    let open_create = move |_| {
        set_title.set(String::new());
        set_description.set(String::new());
        set_price.set(String::new());
        set_paid.set(false);
        set_form_category.set(None);
        set_instructor.set(String::new());
        set_form_target.set(Some(None));
    };

    let open_edit = move |id: ResourceId| {
        spawn_local(async move {
            match api::get_course(id).await {
                Ok(course) => {
                    set_title.set(course.title);
                    set_description.set(course.description);
                    set_price.set(course.price.to_string());
                    set_paid.set(course.price_type == PriceType::Paid);
                    set_form_category.set(Some(course.category_id));
                    set_instructor.set(course.instructor);
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
        let form = CourseForm {
            title: title.get(),
            description: description.get(),
            price: price.get(),
            paid: paid.get(),
            category_id: form_category.get(),
            instructor: instructor.get(),
            thumbnail: selected_file(thumbnail_input),
        };
        let creating = form_target.get() == Some(None);
        if let Err(message) = form.validate(creating) {
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
            Some(Some(id)) => ctrl.update(id, form, settled),
            Some(None) => ctrl.create(form, settled),
            None => {}
        }
    };

    view! {
        <section class="page courses-page">
            <div class="page-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search courses..."
                    prop:value=move || ctrl.filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.set_filters(|f| f.search = value);
                    }
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctrl.set_filters(|f| f.category_id = value.parse::<ResourceId>().ok());
                }>
                    <option value="">"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |c| view! { <option value=c.id.to_string()>{c.name}</option> }
                    />
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctrl.set_filters(|f| {
                        f.price_type = match value.as_str() {
                            "free" => Some(PriceType::Free),
                            "paid" => Some(PriceType::Paid),
                            _ => None,
                        }
                    });
                }>
                    <option value="">"Any price"</option>
                    <option value="free">"Free"</option>
                    <option value="paid">"Paid"</option>
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctrl.set_filters(|f| {
                        f.active = match value.as_str() {
                            "active" => Some(true),
                            "disabled" => Some(false),
                            _ => None,
                        }
                    });
                }>
                    <option value="">"Any status"</option>
                    <option value="active">"Active"</option>
                    <option value="disabled">"Disabled"</option>
                </select>
                <button class="primary-btn" on:click=open_create>"+ New Course"</button>
            </div>

            <Show when=move || form_target.get().is_some()>
                <div class="modal-backdrop">
                    <form class="modal course-form" on:submit=submit>
                        <h2>
                            {move || if form_target.get() == Some(None) { "New Course" } else { "Edit Course" }}
                        </h2>
                        <input
                            type="text"
                            placeholder="Title"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        <textarea
                            placeholder="Description"
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                        <input
                            type="text"
                            placeholder="Instructor"
                            prop:value=move || instructor.get()
                            on:input=move |ev| set_instructor.set(event_target_value(&ev))
                        />
                        <select on:change=move |ev| {
                            set_form_category.set(event_target_value(&ev).parse::<ResourceId>().ok());
                        }>
                            <option value="" selected=move || form_category.get().is_none()>
                                "Select category..."
                            </option>
                            <For
                                each=move || categories.get()
                                key=|c| c.id
                                children=move |c| {
                                    let id = c.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || form_category.get() == Some(id)
                                        >
                                            {c.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                prop:checked=move || paid.get()
                                on:change=move |ev| set_paid.set(event_target_checked(&ev))
                            />
                            "Paid course"
                        </label>
                        <Show when=move || paid.get()>
                            <input
                                type="number"
                                placeholder="Price"
                                prop:value=move || price.get()
                                on:input=move |ev| set_price.set(event_target_value(&ev))
                            />
                        </Show>
                        <label class="file-row">
                            "Thumbnail"
                            <input type="file" accept="image/*" node_ref=thumbnail_input/>
                        </label>
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
                            <th>"Course"</th>
                            <th>"Instructor"</th>
                            <th>"Category"</th>
                            <th>"Price"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || ctrl.items.get()
                            // Key on content so patched rows re-render.
                            key=|course: &Course| format!("{:?}", course)
                            children=move |course| {
                                let id = course.id;
                                let active = course.is_active;
                                let price_label = match course.price_type {
                                    PriceType::Free => "—".to_string(),
                                    PriceType::Paid => format!("${:.2}", course.price),
                                };
                                view! {
                                    <tr>
                                        <td class="course-cell">
                                            {course.thumbnail_url.clone().map(|url| view! {
                                                <img class="thumb" src=url alt=""/>
                                            })}
                                            <span>{course.title}</span>
                                        </td>
                                        <td>{course.instructor}</td>
                                        <td>{move || category_name(course.category_id)}</td>
                                        <td>
                                            <PriceBadge price_type=course.price_type/>
                                            <span class="price">{price_label}</span>
                                        </td>
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

                <Show when=move || ctrl.items.get().is_empty()>
                    <EmptyState
                        collection_empty=Signal::derive(move || {
                            ctrl.filters.get() == Default::default()
                        })
                        resource_name="courses"
                    />
                </Show>
            </Show>
        </section>
    }
}
