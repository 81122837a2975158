// ── Reservation domain type ──

use chrono::NaiveDate;

use super::entity_id::EntityId;
use super::room::Room;
use super::user::User;

/// A stay booked by a user for one room over a date range.
///
/// Dates are `None` when the backend record carried a missing or
/// unparseable date; such reservations never count as overlapping in
/// availability checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reservation {
    /// Server-assigned; `None` until persisted.
    pub id: Option<EntityId>,
    pub start_date: Option<NaiveDate>,
    /// Checkout date; `end_date >= start_date` on well-formed records.
    pub end_date: Option<NaiveDate>,
    /// The booking user. The store stamps the session user on create.
    pub renter_id: Option<EntityId>,
    pub room_id: Option<EntityId>,
    /// Resolved renter. Only attached explicitly via
    /// [`with_renter`](Self::with_renter).
    pub renter: Option<User>,
    /// Resolved room. Only attached explicitly via
    /// [`with_room`](Self::with_room).
    pub room: Option<Room>,
}

impl Reservation {
    /// Attach a pre-validated renter entity.
    pub fn with_renter(mut self, renter: User) -> Self {
        self.renter = Some(renter);
        self
    }

    /// Attach a pre-validated room entity.
    pub fn with_room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }
}
