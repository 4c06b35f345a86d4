//! Resource Controller
//!
//! One generic controller shared by every resource screen instead of a
//! hand-copied variant per page. It owns the view state for a remote
//! collection (items, loading flags, filters) and is the only place allowed
//! to call a gateway: initial load, debounced filtered reload, create,
//! update, delete and status toggle all sequence through here.
//!
//! Every list request carries a generation number. Changing filters, forcing
//! a reload or unmounting the screen advances the generation, so a slow
//! response that arrives late is discarded instead of overwriting newer
//! state.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::http::ApiResult;
use crate::context::Notifier;
use crate::models::ResourceId;

/// Quiet window for filter changes. Any positive delay that collapses a
/// keystroke burst into one request satisfies the contract.
pub const DEBOUNCE_MS: u32 = 350;

/// A backend-owned entity that can live in a controller collection.
pub trait ResourceItem: Clone + PartialEq + Send + Sync + 'static {
    fn id(&self) -> ResourceId;
}

/// Server-side filter set. Unset fields are omitted from the query entirely,
/// never sent as empty strings.
pub trait FilterParams: Clone + Default + PartialEq + Send + Sync + 'static {
    fn to_query(&self) -> Vec<(&'static str, String)>;
}

/// Read side of a resource gateway.
pub trait ListGateway: 'static {
    type Item: ResourceItem;
    type Filters: FilterParams;

    fn list(filters: Self::Filters) -> impl Future<Output = ApiResult<Vec<Self::Item>>>;
}

/// Full CRUD gateway. Create and update share one payload type per resource
/// (JSON args or multipart form, fixed per resource).
pub trait CrudGateway: ListGateway {
    type Payload: 'static;

    fn create(payload: Self::Payload) -> impl Future<Output = ApiResult<Self::Item>>;
    fn update(
        id: ResourceId,
        payload: Self::Payload,
    ) -> impl Future<Output = ApiResult<Self::Item>>;
    fn delete(id: ResourceId) -> impl Future<Output = ApiResult<()>>;
    fn toggle_status(id: ResourceId) -> impl Future<Output = ApiResult<Self::Item>>;
}

/// Replace the item with a matching id in place. Length never changes; the
/// collection is never reordered.
pub fn patch_by_id<T: ResourceItem>(items: &mut [T], updated: T) {
    if let Some(slot) = items.iter_mut().find(|item| item.id() == updated.id()) {
        *slot = updated;
    }
}

/// Remove the item with a matching id. No-op when absent; removes exactly one
/// otherwise.
pub fn remove_by_id<T: ResourceItem>(items: &mut Vec<T>, id: ResourceId) {
    items.retain(|item| item.id() != id);
}

/// Per-screen view state plus synchronization logic for one resource type.
pub struct ResourceController<G: ListGateway> {
    pub items: RwSignal<Vec<G::Item>>,
    pub collection_loading: RwSignal<bool>,
    /// Id of the single row with a mutation in flight; `None` when idle.
    pub row_action: RwSignal<Option<ResourceId>>,
    pub filters: RwSignal<G::Filters>,
    list_generation: StoredValue<u32>,
    notify: Notifier,
}

impl<G: ListGateway> Clone for ResourceController<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ListGateway> Copy for ResourceController<G> {}

impl<G: ListGateway> ResourceController<G> {
    pub fn new(notify: Notifier) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            collection_loading: RwSignal::new(false),
            row_action: RwSignal::new(None),
            filters: RwSignal::new(G::Filters::default()),
            list_generation: StoredValue::new(0),
            notify,
        }
    }

    /// Wire the controller to the current component: initial load plus a
    /// debounced reload whenever filters change. Call once from the page body.
    pub fn mount(self) {
        self.load();
        Effect::new(move |prev: Option<G::Filters>| {
            let current = self.filters.get();
            if let Some(prev) = prev {
                if prev != current {
                    self.reload_debounced();
                }
            }
            current
        });
    }

    /// Advance the generation and return the new value. Anything still
    /// holding an older value has been superseded.
    fn bump_generation(&self) -> u32 {
        let next = self.list_generation.get_value() + 1;
        self.list_generation.set_value(next);
        next
    }

    /// False once a newer request was issued or the owning screen was
    /// disposed; stale responses must not touch state.
    fn is_current(&self, generation: u32) -> bool {
        self.list_generation.try_get_value() == Some(generation)
    }

    pub fn set_filters(&self, apply: impl FnOnce(&mut G::Filters)) {
        self.filters.update(apply);
    }

    /// Fetch the collection with the current filters, replacing items on
    /// success. A failed load leaves an empty collection and toasts once.
    pub fn load(self) {
        let generation = self.bump_generation();
        self.collection_loading.set(true);
        let filters = self.filters.get_untracked();
        spawn_local(async move {
            let result = G::list(filters).await;
            if !self.is_current(generation) {
                return;
            }
            match result {
                Ok(items) => self.items.set(items),
                Err(e) => {
                    web_sys::console::error_1(&format!("[controller] list failed: {}", e).into());
                    self.items.set(Vec::new());
                    self.notify.error(e.user_message());
                }
            }
            self.collection_loading.set(false);
        });
    }

    /// Reload after the quiet window. A filter change during the window
    /// advances the generation, abandoning this wait without issuing a
    /// request, so a keystroke burst costs at most one list call.
    fn reload_debounced(self) {
        let generation = self.bump_generation();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if !self.is_current(generation) {
                return;
            }
            self.collection_loading.set(true);
            let filters = self.filters.get_untracked();
            let result = G::list(filters).await;
            if !self.is_current(generation) {
                return;
            }
            match result {
                Ok(items) => self.items.set(items),
                Err(e) => self.notify.error(e.user_message()),
            }
            self.collection_loading.set(false);
        });
    }

    /// Claim the per-screen row slot. Returns false while another row's
    /// action is still in flight; callers must then drop the request.
    fn try_begin_row_action(&self, id: ResourceId) -> bool {
        if self.row_action.get_untracked().is_some() {
            return false;
        }
        self.row_action.set(Some(id));
        true
    }

    fn end_row_action(&self) {
        self.row_action.set(None);
    }
}

impl<G: CrudGateway> ResourceController<G> {
    /// Create a resource. On success the whole collection is reloaded (the
    /// server may assign ids and derived fields) and `on_settled(true)` lets
    /// the caller reset its form; on failure the form stays populated.
    pub fn create(self, payload: G::Payload, on_settled: impl FnOnce(bool) + 'static) {
        spawn_local(async move {
            match G::create(payload).await {
                Ok(_) => {
                    self.notify.success("Created successfully");
                    self.load();
                    on_settled(true);
                }
                Err(e) => {
                    self.notify.error(e.user_message());
                    on_settled(false);
                }
            }
        });
    }

    /// Update a resource, replacing the local copy with the server-returned
    /// one. Never reloads; the returned resource already carries any
    /// server-computed fields.
    pub fn update(self, id: ResourceId, payload: G::Payload, on_settled: impl FnOnce(bool) + 'static) {
        if !self.try_begin_row_action(id) {
            on_settled(false);
            return;
        }
        spawn_local(async move {
            match G::update(id, payload).await {
                Ok(updated) => {
                    self.items.update(|items| patch_by_id(items, updated));
                    self.notify.success("Updated successfully");
                    self.end_row_action();
                    on_settled(true);
                }
                Err(e) => {
                    self.notify.error(e.user_message());
                    self.end_row_action();
                    on_settled(false);
                }
            }
        });
    }

    /// Delete a resource. Confirmation is the presentation layer's job; by
    /// the time this runs the user already confirmed. The row disappears
    /// immediately on success, then a reload reconciles with the server.
    pub fn delete(self, id: ResourceId) {
        if !self.try_begin_row_action(id) {
            return;
        }
        spawn_local(async move {
            match G::delete(id).await {
                Ok(()) => {
                    self.items.update(|items| remove_by_id(items, id));
                    self.notify.success("Deleted successfully");
                    self.end_row_action();
                    self.load();
                }
                Err(e) => {
                    self.notify.error(e.user_message());
                    self.end_row_action();
                }
            }
        });
    }

    /// Flip the active flag. The local item is only patched after the server
    /// confirms, so a failure leaves the visible status untouched.
    pub fn toggle_status(self, id: ResourceId) {
        if !self.try_begin_row_action(id) {
            return;
        }
        spawn_local(async move {
            match G::toggle_status(id).await {
                Ok(updated) => {
                    self.items.update(|items| patch_by_id(items, updated));
                    self.notify.success("Status updated");
                }
                Err(e) => self.notify.error(e.user_message()),
            }
            self.end_row_action();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CategoryGateway;
    use crate::context::Notifier;
    use crate::models::Category;

    fn cat(id: ResourceId, name: &str, active: bool) -> Category {
        Category {
            id,
            name: name.to_string(),
            is_active: active,
        }
    }

    #[test]
    fn patch_replaces_matching_item_only() {
        let mut items = vec![cat(1, "Python", true), cat(2, "Rust", true)];
        patch_by_id(&mut items, cat(1, "Python 3", true));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Python 3");
        assert_eq!(items[1].name, "Rust");
    }

    #[test]
    fn patch_with_unknown_id_changes_nothing() {
        let mut items = vec![cat(1, "Python", true)];
        patch_by_id(&mut items, cat(9, "Ghost", true));
        assert_eq!(items, vec![cat(1, "Python", true)]);
    }

    #[test]
    fn remove_drops_exactly_one_and_ignores_absent_ids() {
        let mut items = vec![cat(1, "Python", true), cat(2, "Rust", true)];
        remove_by_id(&mut items, 2);
        assert_eq!(items, vec![cat(1, "Python", true)]);
        remove_by_id(&mut items, 2);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn patch_preserves_order() {
        let mut items = vec![cat(3, "C", true), cat(1, "A", true), cat(2, "B", true)];
        patch_by_id(&mut items, cat(1, "A2", false));
        let ids: Vec<_> = items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(!items[1].is_active);
    }

    #[test]
    fn row_action_slot_is_exclusive_per_screen() {
        let ctrl: ResourceController<CategoryGateway> = ResourceController::new(Notifier::new());
        assert!(ctrl.try_begin_row_action(1));
        assert!(
            !ctrl.try_begin_row_action(2),
            "second row action must be refused while the first is in flight"
        );
        ctrl.end_row_action();
        assert!(ctrl.try_begin_row_action(2));
    }

    #[test]
    fn only_the_newest_generation_is_current() {
        let ctrl: ResourceController<CategoryGateway> = ResourceController::new(Notifier::new());
        let first = ctrl.bump_generation();
        assert!(ctrl.is_current(first));
        let second = ctrl.bump_generation();
        assert!(!ctrl.is_current(first), "superseded responses must be discarded");
        assert!(ctrl.is_current(second));
    }

    #[test]
    fn filter_burst_abandons_every_wait_but_the_last() {
        let ctrl: ResourceController<CategoryGateway> = ResourceController::new(Notifier::new());
        // Three filter edits inside one quiet window. Each edit restarts the
        // wait by advancing the generation; a wait whose generation is no
        // longer current returns before issuing its list request, so the
        // burst costs at most one call.
        let waits: Vec<u32> = (0..3).map(|_| ctrl.bump_generation()).collect();
        let surviving: Vec<u32> = waits
            .iter()
            .copied()
            .filter(|&g| ctrl.is_current(g))
            .collect();
        assert_eq!(surviving, vec![waits[2]]);
    }

    #[test]
    fn toggle_twice_restores_status_at_model_level() {
        let mut items = vec![cat(1, "Python", true)];
        let mut flipped = items[0].clone();
        flipped.is_active = !flipped.is_active;
        patch_by_id(&mut items, flipped.clone());
        assert!(!items[0].is_active);
        let mut back = flipped;
        back.is_active = !back.is_active;
        patch_by_id(&mut items, back);
        assert!(items[0].is_active);
    }
}
