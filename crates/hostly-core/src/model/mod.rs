// ── Domain model ──
//
// Every type in this module is the canonical, fully-typed representation
// of one backend entity. Raw wire shapes live in `crate::record`; the
// normalizer in `crate::convert` is the only bridge between the two.
// Relational links (`hotel.owner`, `reservation.room`, ...) hold a typed
// entity or `None` -- never a raw payload fragment.

pub mod entity_id;

pub mod hotel;
pub mod reservation;
pub mod room;
pub mod subscription;
pub mod user;

// ── Re-exports ──────────────────────────────────────────────────────

pub use entity_id::EntityId;

pub use hotel::Hotel;
pub use reservation::Reservation;
pub use room::{Room, RoomType};
pub use subscription::{PlanType, Subscription};
pub use user::{User, UserRole};
