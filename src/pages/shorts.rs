//! Shorts Screen
//!
//! Card grid for short videos. Search is server-side; create/edit uploads
//! the video (and optional thumbnail) as multipart.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{selected_file, FormTarget};
use crate::api::{self, ShortForm, ShortGateway};
use crate::components::{EmptyState, RowActions, SectionSpinner, StatusBadge};
use crate::context::use_app_context;
use crate::controller::ResourceController;
use crate::models::{ResourceId, Short};

#[component]
pub fn ShortsPage() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl: ResourceController<ShortGateway> = ResourceController::new(ctx.notify);
    ctrl.mount();

    let (form_target, set_form_target) = signal::<FormTarget>(None);
    let (title, set_title) = signal(String::new());
    // Modal is recreated on every open, so the inputs start empty; files are
    // read from the node refs at submit time.
    let video_input: NodeRef<html::Input> = NodeRef::new();
    let thumbnail_input: NodeRef<html::Input> = NodeRef::new();
    let (saving, set_saving) = signal(false);

    let open_create = move |_| {
        set_title.set(String::new());
        set_form_target.set(Some(None));
    };

    // Edit re-fetches the short so the form never starts from a stale row.
    let open_edit = move |id: ResourceId| {
        spawn_local(async move {
            match api::get_short(id).await {
                Ok(short) => {
                    set_title.set(short.title);
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
        let form = ShortForm {
            title: title.get(),
            video: selected_file(video_input),
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
        <section class="page shorts-page">
            <div class="page-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search shorts..."
                    prop:value=move || ctrl.filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctrl.set_filters(|f| f.search = value);
                    }
                />
                <button class="primary-btn" on:click=open_create>"+ New Short"</button>
            </div>

            <Show when=move || form_target.get().is_some()>
                <div class="modal-backdrop">
                    <form class="modal short-form" on:submit=submit>
                        <h2>
                            {move || if form_target.get() == Some(None) { "New Short" } else { "Edit Short" }}
                        </h2>
                        <input
                            type="text"
                            placeholder="Title"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        <label class="file-row">
                            "Video"
                            <input type="file" accept="video/*" node_ref=video_input/>
                        </label>
                        <label class="file-row">
                            "Thumbnail (optional)"
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
                <div class="shorts-grid">
                    <For
                        each=move || ctrl.items.get()
                        // Key on content so patched cards re-render.
                        key=|short: &Short| format!("{:?}", short)
                        children=move |short| {
                            let id = short.id;
                            let active = short.is_active;
                            view! {
                                <div class="short-card">
                                    {short.thumbnail_url.clone().map(|url| view! {
                                        <img class="short-thumb" src=url alt=""/>
                                    })}
                                    <div class="short-title">{short.title.clone()}</div>
                                    <div class="short-meta">
                                        <StatusBadge active=active/>
                                        <RowActions
                                            id=id
                                            row_action=ctrl.row_action
                                            active=active
                                            on_edit=Callback::new(move |_| open_edit(id))
                                            on_toggle=Callback::new(move |_| ctrl.toggle_status(id))
                                            on_delete=Callback::new(move |_| ctrl.delete(id))
                                        />
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <Show when=move || ctrl.items.get().is_empty()>
                    <EmptyState
                        collection_empty=Signal::derive(move || {
                            ctrl.filters.get().search.trim().is_empty()
                        })
                        resource_name="shorts"
                    />
                </Show>
            </Show>
        </section>
    }
}
