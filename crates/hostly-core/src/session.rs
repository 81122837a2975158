// ── Session context ──
//
// The current authenticated user plus its durable mirror. Login is a
// linear scan over the freshly fetched user set -- the backend has no
// auth endpoint, credentials are compared verbatim. Session state is
// mirrored to a key-value slot so a restart resumes the prior session;
// anything unreadable in the slot is discarded and treated as
// logged-out.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::watch;
use tracing::warn;

use crate::convert::{self, Entity};
use crate::error::StoreError;
use crate::model::{User, UserRole};
use crate::record::UserRecord;
use crate::store::ResourceStore;
use crate::store::resource::BusyGuard;

/// Key under which the session mirror lives in the slot.
pub const SESSION_KEY: &str = "hostly.session";

// ── Durable slot ────────────────────────────────────────────────────

/// A durable local key-value slot. Used only for session persistence.
pub trait SessionSlot: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process slot for tests and ephemeral embeddings -- nothing
/// survives the process.
#[derive(Default)]
pub struct MemorySlot {
    inner: RwLock<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.read().expect("slot lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .write()
            .expect("slot lock poisoned")
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.inner.write().expect("slot lock poisoned").remove(key);
    }
}

// ── Session context ─────────────────────────────────────────────────

/// The current user (id + role), observable via a `watch` channel.
pub struct SessionContext {
    current: watch::Sender<Option<User>>,
    slot: Arc<dyn SessionSlot>,
    busy: watch::Sender<bool>,
    errors: RwLock<Vec<StoreError>>,
}

impl SessionContext {
    /// Create a context, restoring any prior session from the slot.
    pub fn new(slot: Arc<dyn SessionSlot>) -> Self {
        let restored = Self::restore(slot.as_ref());
        let (current, _) = watch::channel(restored);
        let (busy, _) = watch::channel(false);
        Self {
            current,
            slot,
            busy,
            errors: RwLock::new(Vec::new()),
        }
    }

    /// Read the slot; corrupt state is discarded, not surfaced.
    fn restore(slot: &dyn SessionSlot) -> Option<User> {
        let raw = slot.get(SESSION_KEY)?;
        match serde_json::from_str::<UserRecord>(&raw) {
            Ok(record) => Some(User::from_record(record)),
            Err(e) => {
                warn!(error = %e, "discarding corrupt stored session");
                slot.remove(SESSION_KEY);
                None
            }
        }
    }

    // ── State observation ────────────────────────────────────────────

    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    /// Errors recorded so far, oldest first.
    pub fn errors(&self) -> Vec<StoreError> {
        self.errors.read().expect("error log poisoned").clone()
    }

    pub fn clear_errors(&self) {
        self.errors.write().expect("error log poisoned").clear();
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Exact-match the credentials against the full fetched user set.
    ///
    /// `false` plus a recorded error on no match; the session is left
    /// unchanged.
    pub async fn login(&self, users: &ResourceStore<User>, email: &str, password: &str) -> bool {
        let _busy = BusyGuard::enter(&self.busy);

        let resp = match users.transport().get_all().await {
            Ok(resp) => resp,
            Err(e) => {
                self.record(StoreError::transport("login", &e));
                return false;
            }
        };
        if resp.status != 200 {
            self.record(StoreError::status("login", &resp));
            return false;
        }

        let all: Vec<User> = convert::to_entities(resp);
        match all
            .into_iter()
            .find(|u| u.email == email && u.password == password)
        {
            Some(found) => {
                self.set_current(Some(found));
                true
            }
            None => {
                self.record(StoreError::new("login", "invalid credentials"));
                false
            }
        }
    }

    /// Create the account and adopt it as the current session user.
    ///
    /// An unset role defaults to `client`.
    pub async fn register(&self, users: &ResourceStore<User>, mut user: User) -> bool {
        let _busy = BusyGuard::enter(&self.busy);

        if user.role.is_unset() {
            user.role = UserRole::Client;
        }

        let body = match serde_json::to_value(user.to_record()) {
            Ok(v) => v,
            Err(e) => {
                self.record(StoreError::new("register", e.to_string()));
                return false;
            }
        };

        match users.transport().create(&body).await {
            Ok(resp) if resp.is_success() => match convert::to_entity::<User>(resp.body) {
                Some(created) => {
                    self.set_current(Some(created));
                    true
                }
                None => {
                    self.record(StoreError::new("register", "malformed record payload"));
                    false
                }
            },
            Ok(resp) => {
                self.record(StoreError::status("register", &resp));
                false
            }
            Err(e) => {
                self.record(StoreError::transport("register", &e));
                false
            }
        }
    }

    /// Clear the session and its durable mirror.
    pub fn logout(&self) {
        self.set_current(None);
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn set_current(&self, user: Option<User>) {
        match &user {
            Some(u) => match serde_json::to_string(&u.to_record()) {
                Ok(raw) => self.slot.set(SESSION_KEY, &raw),
                Err(e) => warn!(error = %e, "session mirror write failed"),
            },
            None => self.slot.remove(SESSION_KEY),
        }
        self.current.send_replace(user);
    }

    fn record(&self, err: StoreError) {
        warn!(error = %err, "session operation failed");
        self.errors.write().expect("error log poisoned").push(err);
    }
}
