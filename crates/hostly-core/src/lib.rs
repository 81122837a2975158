//! In-memory data layer between `hostly-api` and UI consumers.
//!
//! This crate owns the domain model, the normalization boundary, the
//! per-entity CRUD collections, the cross-entity query views, and the
//! session context for a hostel-management client:
//!
//! - **Domain model** ([`model`]) — typed, defaulted, id-bearing entities
//!   (`Hotel`, `Room`, `Reservation`, `Subscription`, `User`) with
//!   [`EntityId`] covering numeric, UUID, and opaque string keys.
//!   Relational links hold a typed entity or `None` -- never a raw
//!   payload fragment.
//!
//! - **Normalizer** ([`convert`]) — the only bridge between wire records
//!   ([`record`]) and domain types. Fetch payloads may be bare lists or
//!   keyed objects; non-200 results are logged and degrade to empty.
//!
//! - **[`Stores`]** — five [`ResourceStore`]s, constructed once and
//!   injected. Each caches one collection, commits local changes only
//!   after the backend confirms, records failures instead of
//!   propagating them, and exposes snapshot/busy `watch` channels.
//!
//! - **Query views** ([`query`]) — pure functions over collection
//!   snapshots: owner scoping (`my_hotels`, `hotel_reservations`),
//!   link resolution (`reservation_details`), and date-range
//!   availability (`is_room_available`, inclusive bounds).
//!
//! - **[`SessionContext`]** — current user + role, mirrored to a durable
//!   [`SessionSlot`] so a restart resumes the prior session.

pub mod convert;
pub mod error;
pub mod model;
pub mod query;
pub mod record;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

// ── Primary re-exports ──────────────────────────────────────────────
pub use convert::{Entity, to_entities, to_entity};
pub use error::StoreError;
pub use query::ReservationDetails;
pub use session::{MemorySlot, SESSION_KEY, SessionContext, SessionSlot};
pub use store::{ResourceStore, Stores};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    EntityId,
    Hotel,
    PlanType,
    Reservation,
    Room,
    RoomType,
    Subscription,
    User,
    UserRole,
};
