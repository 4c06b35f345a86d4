//! Categories Screen
//!
//! Canonical JSON resource screen: client-side search, inline create form,
//! inline row editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CategoryGateway, CategoryPayload};
use crate::components::{EmptyState, RowActions, SectionSpinner, StatusBadge};
use crate::context::use_app_context;
use crate::controller::ResourceController;
use crate::models::{matches_search, Category, ResourceId};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl: ResourceController<CategoryGateway> = ResourceController::new(ctx.notify);
    ctrl.mount();

    // Client-side search over the already-fetched collection.
    let (search, set_search) = signal(String::new());
    let visible = Memo::new(move |_| {
        let needle = search.get();
        ctrl.items
            .get()
            .into_iter()
            .filter(|c| matches_search(&c.name, &needle))
            .collect::<Vec<_>>()
    });

    // Create form
    let (new_name, set_new_name) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let payload = CategoryPayload {
            name: new_name.get(),
        };
        if let Err(message) = payload.validate() {
            ctx.notify.error(message);
            return;
        }
        set_saving.set(true);
        ctrl.create(payload, move |ok| {
            set_saving.set(false);
            if ok {
                set_new_name.set(String::new());
            }
        });
    };

    // Inline row editing; the edit affordance re-fetches the resource first.
    let (editing, set_editing) = signal::<Option<Category>>(None);

    let begin_edit = move |id: ResourceId| {
        spawn_local(async move {
            match api::get_category(id).await {
                Ok(category) => set_editing.set(Some(category)),
                Err(e) => {
                    set_editing.set(None);
                    ctx.notify.error(e.user_message());
                }
            }
        });
    };

    let save_edit = move |_| {
        let Some(category) = editing.get() else {
            return;
        };
        let payload = CategoryPayload {
            name: category.name.clone(),
        };
        if let Err(message) = payload.validate() {
            ctx.notify.error(message);
            return;
        }
        ctrl.update(category.id, payload, move |ok| {
            if ok {
                set_editing.set(None);
            }
        });
    };

    view! {
        <section class="page categories-page">
            <div class="page-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search categories..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <form class="inline-create-form" on:submit=create>
                    <input
                        type="text"
                        placeholder="New category name..."
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Adding..." } else { "Add" }}
                    </button>
                </form>
            </div>

            <Show when=move || ctrl.collection_loading.get()>
                <SectionSpinner/>
            </Show>

            <Show when=move || !ctrl.collection_loading.get()>
                <table class="resource-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        // Key on content, not just id: a patched row must re-render.
                        <For
                            each=move || visible.get()
                            key=|category| format!("{:?}", category)
                            children=move |category| {
                                let id = category.id;
                                let active = category.is_active;
                                let name = category.name.clone();
                                let is_editing = move || editing.get().map(|c| c.id) == Some(id);
                                view! {
                                    <tr>
                                        <td>
                                            <Show when=is_editing>
                                                <input
                                                    type="text"
                                                    prop:value=move || {
                                                        editing.get().map(|c| c.name).unwrap_or_default()
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        set_editing.update(|e| {
                                                            if let Some(c) = e.as_mut() {
                                                                c.name = value.clone();
                                                            }
                                                        });
                                                    }
                                                />
                                                <button class="confirm-btn" on:click=save_edit>"Save"</button>
                                                <button
                                                    class="cancel-btn"
                                                    on:click=move |_| set_editing.set(None)
                                                >
                                                    "Cancel"
                                                </button>
                                            </Show>
                                            <Show when=move || !is_editing()>
                                                <span class="category-name">{name.clone()}</span>
                                            </Show>
                                        </td>
                                        <td>
                                            <StatusBadge active=active/>
                                        </td>
                                        <td>
                                            <RowActions
                                                id=id
                                                row_action=ctrl.row_action
                                                active=active
                                                on_edit=Callback::new(move |_| begin_edit(id))
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
                        resource_name="categories"
                    />
                </Show>
            </Show>
        </section>
    }
}
