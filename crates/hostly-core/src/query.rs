// ── Cross-entity derived views ──
//
// Pure joins over the collection contents: owner scoping, reservation
// detail resolution, and date-range availability. Every function takes
// the collections it reads as explicit slices, so the views are
// recomputed from whatever snapshot the caller holds and need no store
// wiring to test. `Stores` exposes thin wrappers that feed in its own
// snapshots.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::{EntityId, Hotel, Reservation, Room, User};

/// Hotels owned by the given user.
pub fn my_hotels(hotels: &[Hotel], user_id: &EntityId) -> Vec<Hotel> {
    hotels
        .iter()
        .filter(|h| h.owner_id.as_ref() == Some(user_id))
        .cloned()
        .collect()
}

/// Rooms belonging to any hotel owned by the given user.
pub fn my_hotels_rooms(hotels: &[Hotel], rooms: &[Room], user_id: &EntityId) -> Vec<Room> {
    let hotel_ids: HashSet<&EntityId> = hotels
        .iter()
        .filter(|h| h.owner_id.as_ref() == Some(user_id))
        .filter_map(|h| h.id.as_ref())
        .collect();

    rooms
        .iter()
        .filter(|r| r.hotel_id.as_ref().is_some_and(|id| hotel_ids.contains(id)))
        .cloned()
        .collect()
}

/// Reservations booked by the given user.
pub fn my_reservations(reservations: &[Reservation], user_id: &EntityId) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| r.renter_id.as_ref() == Some(user_id))
        .cloned()
        .collect()
}

/// Reservations landing in the viewer's hotels (owner dashboard view).
///
/// Empty unless the viewer's role is `owner`, regardless of what the
/// collections contain.
pub fn hotel_reservations(
    viewer: &User,
    hotels: &[Hotel],
    rooms: &[Room],
    reservations: &[Reservation],
) -> Vec<Reservation> {
    if !viewer.role.is_owner() {
        return Vec::new();
    }
    let Some(user_id) = viewer.id.as_ref() else {
        return Vec::new();
    };

    let owned_rooms = my_hotels_rooms(hotels, rooms, user_id);
    let room_ids: HashSet<&EntityId> = owned_rooms.iter().filter_map(|r| r.id.as_ref()).collect();

    reservations
        .iter()
        .filter(|r| r.room_id.as_ref().is_some_and(|id| room_ids.contains(id)))
        .cloned()
        .collect()
}

/// A reservation joined to its room, the room's hotel, and the renter.
///
/// Any link that cannot be resolved stays `None`; resolution never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub room: Option<Room>,
    pub hotel: Option<Hotel>,
    pub user: Option<User>,
}

/// Resolve a reservation's links against the given collections.
pub fn reservation_details(
    reservation: &Reservation,
    rooms: &[Room],
    hotels: &[Hotel],
    users: &[User],
) -> ReservationDetails {
    let room = reservation
        .room_id
        .as_ref()
        .and_then(|id| rooms.iter().find(|r| r.id.as_ref() == Some(id)))
        .cloned();

    let hotel = room
        .as_ref()
        .and_then(|r| r.hotel_id.as_ref())
        .and_then(|id| hotels.iter().find(|h| h.id.as_ref() == Some(id)))
        .cloned();

    let user = reservation
        .renter_id
        .as_ref()
        .and_then(|id| users.iter().find(|u| u.id.as_ref() == Some(id)))
        .cloned();

    ReservationDetails {
        reservation: reservation.clone(),
        room,
        hotel,
        user,
    }
}

/// Whether a room is free over `[start, end]`.
///
/// Two ranges overlap iff `s1 <= e2 && e1 >= s2` -- inclusive on both
/// ends, so a checkout day touching a checkin day counts as a conflict.
/// Reservations with missing dates never overlap anything, and the
/// reservation with id `exclude` (the one being edited) is ignored.
pub fn is_room_available(
    reservations: &[Reservation],
    room_id: &EntityId,
    start: NaiveDate,
    end: NaiveDate,
    exclude: Option<&EntityId>,
) -> bool {
    !reservations.iter().any(|r| {
        if let Some(excluded) = exclude {
            if r.id.as_ref() == Some(excluded) {
                return false;
            }
        }
        if r.room_id.as_ref() != Some(room_id) {
            return false;
        }
        let (Some(r_start), Some(r_end)) = (r.start_date, r.end_date) else {
            return false;
        };
        start <= r_end && end >= r_start
    })
}
