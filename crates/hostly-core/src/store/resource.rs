// ── Generic in-memory resource collection ──
//
// One `ResourceStore<T>` caches one entity kind and keeps itself
// consistent with the last known server state: the local vec is only
// touched after the corresponding call confirms, and failures resolve
// to `None`/`false` plus a recorded error -- they never propagate.
// Snapshots and the busy flag are `watch` channels so consumers can
// render reactively or poll, as they prefer.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;
use tracing::warn;

use hostly_api::ResourceApi;

use crate::convert::{self, Entity};
use crate::error::StoreError;
use crate::model::EntityId;

/// Clears the busy flag when the operation resumes or bails.
///
/// The flag is a plain boolean, not a counter: with two operations in
/// flight against one store, whichever finishes first clears it.
pub(crate) struct BusyGuard<'a>(&'a watch::Sender<bool>);

impl<'a> BusyGuard<'a> {
    pub(crate) fn enter(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

/// In-memory cache plus CRUD operations for one entity kind.
pub struct ResourceStore<T: Entity> {
    api: Arc<dyn ResourceApi>,
    items: watch::Sender<Arc<Vec<T>>>,
    busy: watch::Sender<bool>,
    errors: RwLock<Vec<StoreError>>,
}

impl<T: Entity> ResourceStore<T> {
    pub fn new(api: Arc<dyn ResourceApi>) -> Self {
        let (items, _) = watch::channel(Arc::new(Vec::new()));
        let (busy, _) = watch::channel(false);
        Self {
            api,
            items,
            busy,
            errors: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn transport(&self) -> &Arc<dyn ResourceApi> {
        &self.api
    }

    // ── CRUD operations ──────────────────────────────────────────────

    /// Replace the whole local set from the server.
    ///
    /// Tolerant of partial and empty results; a non-200 response leaves
    /// the set empty and records one error. A transport failure leaves
    /// the existing set untouched.
    pub async fn fetch_all(&self) {
        let _busy = BusyGuard::enter(&self.busy);

        match self.api.get_all().await {
            Ok(resp) => {
                if resp.status != 200 {
                    self.record(StoreError::status("fetch_all", &resp));
                }
                let entities = convert::to_entities::<T>(resp);
                self.items.send_replace(Arc::new(entities));
            }
            Err(e) => self.record(StoreError::transport("fetch_all", &e)),
        }
    }

    /// Round-trip a single record from the server. Does not touch the
    /// local set.
    pub async fn get_by_id(&self, id: &EntityId) -> Option<T> {
        let _busy = BusyGuard::enter(&self.busy);

        match self.api.get_by_id(&id.to_string()).await {
            Ok(resp) if resp.is_success() => match convert::to_entity(resp.body) {
                Some(entity) => Some(entity),
                None => {
                    self.record(StoreError::new("get_by_id", "malformed record payload"));
                    None
                }
            },
            Ok(resp) => {
                self.record(StoreError::status("get_by_id", &resp));
                None
            }
            Err(e) => {
                self.record(StoreError::transport("get_by_id", &e));
                None
            }
        }
    }

    /// Create on the server, then append the confirmed record locally.
    pub async fn create(&self, entity: T) -> Option<T> {
        let _busy = BusyGuard::enter(&self.busy);

        let body = match serde_json::to_value(entity.to_record()) {
            Ok(v) => v,
            Err(e) => {
                self.record(StoreError::new("create", e.to_string()));
                return None;
            }
        };

        match self.api.create(&body).await {
            Ok(resp) if resp.is_success() => match convert::to_entity::<T>(resp.body) {
                Some(created) => {
                    self.push_item(created.clone());
                    Some(created)
                }
                None => {
                    self.record(StoreError::new("create", "malformed record payload"));
                    None
                }
            },
            Ok(resp) => {
                self.record(StoreError::status("create", &resp));
                None
            }
            Err(e) => {
                self.record(StoreError::transport("create", &e));
                None
            }
        }
    }

    /// Full-object replacement by id, then swap the matching local
    /// element. Entities without an id cannot be updated.
    pub async fn update(&self, entity: T) -> Option<T> {
        let _busy = BusyGuard::enter(&self.busy);

        let Some(id) = entity.id().cloned() else {
            self.record(StoreError::new("update", "entity has no id"));
            return None;
        };

        let body = match serde_json::to_value(entity.to_record()) {
            Ok(v) => v,
            Err(e) => {
                self.record(StoreError::new("update", e.to_string()));
                return None;
            }
        };

        match self.api.update(&id.to_string(), &body).await {
            Ok(resp) if resp.is_success() => match convert::to_entity::<T>(resp.body) {
                Some(updated) => {
                    self.replace_item(&updated);
                    Some(updated)
                }
                None => {
                    self.record(StoreError::new("update", "malformed record payload"));
                    None
                }
            },
            Ok(resp) => {
                self.record(StoreError::status("update", &resp));
                None
            }
            Err(e) => {
                self.record(StoreError::transport("update", &e));
                None
            }
        }
    }

    /// Delete on the server, then drop the matching local element.
    pub async fn delete(&self, id: &EntityId) -> bool {
        let _busy = BusyGuard::enter(&self.busy);

        match self.api.delete(&id.to_string()).await {
            Ok(resp) if resp.is_success() => {
                self.remove_item(id);
                true
            }
            Ok(resp) => {
                self.record(StoreError::status("delete", &resp));
                false
            }
            Err(e) => {
                self.record(StoreError::transport("delete", &e));
                false
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The current cached set (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        self.items.borrow().clone()
    }

    /// Subscribe to set changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<T>>> {
        self.items.subscribe()
    }

    /// Whether an operation is currently in flight.
    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    /// Subscribe to busy-flag changes.
    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    /// Errors recorded so far, oldest first.
    pub fn errors(&self) -> Vec<StoreError> {
        self.errors.read().expect("error log poisoned").clone()
    }

    pub fn clear_errors(&self) {
        self.errors.write().expect("error log poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn record(&self, err: StoreError) {
        warn!(error = %err, "store operation failed");
        self.errors.write().expect("error log poisoned").push(err);
    }

    fn push_item(&self, item: T) {
        self.items.send_modify(|items| {
            let mut next = items.as_ref().clone();
            next.push(item);
            *items = Arc::new(next);
        });
    }

    fn replace_item(&self, updated: &T) {
        self.items.send_modify(|items| {
            let mut next = items.as_ref().clone();
            if let Some(slot) = next.iter_mut().find(|i| i.id() == updated.id()) {
                *slot = updated.clone();
            }
            *items = Arc::new(next);
        });
    }

    fn remove_item(&self, id: &EntityId) {
        self.items.send_modify(|items| {
            let mut next = items.as_ref().clone();
            next.retain(|i| i.id() != Some(id));
            *items = Arc::new(next);
        });
    }
}
