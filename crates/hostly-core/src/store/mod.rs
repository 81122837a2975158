// ── In-memory data layer ──
//
// One `ResourceStore` per entity kind, bundled in `Stores`. Construct
// once at application start and pass by reference to whatever needs
// it -- there are no globals here.

pub mod resource;

pub use resource::ResourceStore;

use std::sync::Arc;

use chrono::NaiveDate;

use hostly_api::{HostelApi, ResourceApi};

use crate::model::{EntityId, Hotel, Reservation, Room, Subscription, User};
use crate::query::{self, ReservationDetails};
use crate::session::SessionContext;

/// The five entity collections behind one handle.
pub struct Stores {
    pub hotels: ResourceStore<Hotel>,
    pub rooms: ResourceStore<Room>,
    pub reservations: ResourceStore<Reservation>,
    pub subscriptions: ResourceStore<Subscription>,
    pub users: ResourceStore<User>,
}

impl Stores {
    /// Wire every store against a REST backend.
    pub fn new(api: &HostelApi) -> Self {
        Self {
            hotels: ResourceStore::new(Arc::new(api.hotels.clone())),
            rooms: ResourceStore::new(Arc::new(api.rooms.clone())),
            reservations: ResourceStore::new(Arc::new(api.reservations.clone())),
            subscriptions: ResourceStore::new(Arc::new(api.subscriptions.clone())),
            users: ResourceStore::new(Arc::new(api.users.clone())),
        }
    }

    /// Wire every store against arbitrary transports (tests, embedding).
    pub fn with_transports(
        hotels: Arc<dyn ResourceApi>,
        rooms: Arc<dyn ResourceApi>,
        reservations: Arc<dyn ResourceApi>,
        subscriptions: Arc<dyn ResourceApi>,
        users: Arc<dyn ResourceApi>,
    ) -> Self {
        Self {
            hotels: ResourceStore::new(hotels),
            rooms: ResourceStore::new(rooms),
            reservations: ResourceStore::new(reservations),
            subscriptions: ResourceStore::new(subscriptions),
            users: ResourceStore::new(users),
        }
    }

    /// Fetch all five collections concurrently. Completion order is
    /// unordered; each store degrades independently on failure.
    pub async fn refresh_all(&self) {
        tokio::join!(
            self.hotels.fetch_all(),
            self.rooms.fetch_all(),
            self.reservations.fetch_all(),
            self.subscriptions.fetch_all(),
            self.users.fetch_all(),
        );
    }

    // ── Session-aware creation ───────────────────────────────────────

    /// Create a hotel owned by the session user.
    pub async fn create_hotel(&self, session: &SessionContext, mut hotel: Hotel) -> Option<Hotel> {
        if let Some(id) = session.current_user().and_then(|u| u.id) {
            hotel.owner_id = Some(id);
        }
        self.hotels.create(hotel).await
    }

    /// Create a reservation booked by the session user.
    pub async fn create_reservation(
        &self,
        session: &SessionContext,
        mut reservation: Reservation,
    ) -> Option<Reservation> {
        if let Some(id) = session.current_user().and_then(|u| u.id) {
            reservation.renter_id = Some(id);
        }
        self.reservations.create(reservation).await
    }

    /// Refetch rooms, then return those belonging to the given hotel.
    pub async fn rooms_by_hotel(&self, hotel_id: &EntityId) -> Vec<Room> {
        self.rooms.fetch_all().await;
        self.rooms
            .snapshot()
            .iter()
            .filter(|r| r.hotel_id.as_ref() == Some(hotel_id))
            .cloned()
            .collect()
    }

    // ── Derived views (recomputed per call from current snapshots) ──

    pub fn my_hotels(&self, user_id: &EntityId) -> Vec<Hotel> {
        query::my_hotels(&self.hotels.snapshot(), user_id)
    }

    pub fn my_hotels_rooms(&self, user_id: &EntityId) -> Vec<Room> {
        query::my_hotels_rooms(&self.hotels.snapshot(), &self.rooms.snapshot(), user_id)
    }

    pub fn my_reservations(&self, user_id: &EntityId) -> Vec<Reservation> {
        query::my_reservations(&self.reservations.snapshot(), user_id)
    }

    pub fn hotel_reservations(&self, session: &SessionContext) -> Vec<Reservation> {
        let Some(viewer) = session.current_user() else {
            return Vec::new();
        };
        query::hotel_reservations(
            &viewer,
            &self.hotels.snapshot(),
            &self.rooms.snapshot(),
            &self.reservations.snapshot(),
        )
    }

    pub fn reservation_details(&self, reservation: &Reservation) -> ReservationDetails {
        query::reservation_details(
            reservation,
            &self.rooms.snapshot(),
            &self.hotels.snapshot(),
            &self.users.snapshot(),
        )
    }

    pub fn is_room_available(
        &self,
        room_id: &EntityId,
        start: NaiveDate,
        end: NaiveDate,
        exclude: Option<&EntityId>,
    ) -> bool {
        query::is_room_available(&self.reservations.snapshot(), room_id, start, end, exclude)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::{MemorySlot, SESSION_KEY, SessionSlot};
    use crate::testutil::StubApi;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Fixture {
        stores: Stores,
        hotels_api: Arc<StubApi>,
        rooms_api: Arc<StubApi>,
        reservations_api: Arc<StubApi>,
        subscriptions_api: Arc<StubApi>,
        users_api: Arc<StubApi>,
    }

    fn fixture() -> Fixture {
        let hotels_api = Arc::new(StubApi::new());
        let rooms_api = Arc::new(StubApi::new());
        let reservations_api = Arc::new(StubApi::new());
        let subscriptions_api = Arc::new(StubApi::new());
        let users_api = Arc::new(StubApi::new());
        let stores = Stores::with_transports(
            hotels_api.clone(),
            rooms_api.clone(),
            reservations_api.clone(),
            subscriptions_api.clone(),
            users_api.clone(),
        );
        Fixture {
            stores,
            hotels_api,
            rooms_api,
            reservations_api,
            subscriptions_api,
            users_api,
        }
    }

    /// A session pre-seeded with an owner account (id 7).
    fn owner_session() -> SessionContext {
        let slot = Arc::new(MemorySlot::new());
        slot.set(
            SESSION_KEY,
            r#"{"id":7,"name":"Nina","email":"nina@example.com","password":"pw","type_user":"owner"}"#,
        );
        SessionContext::new(slot)
    }

    #[tokio::test]
    async fn create_hotel_stamps_session_owner() {
        let f = fixture();
        f.hotels_api
            .respond(201, json!({ "id": 1, "name": "Casa Andina", "users_id": 7 }));
        let session = owner_session();

        let created = f
            .stores
            .create_hotel(&session, Hotel { name: "Casa Andina".into(), ..Hotel::default() })
            .await
            .unwrap();

        let sent = f.hotels_api.calls()[0].body.clone().unwrap();
        assert_eq!(sent["users_id"], 7);
        assert_eq!(created.owner_id, Some(EntityId::Num(7)));
    }

    #[tokio::test]
    async fn create_reservation_stamps_session_renter() {
        let f = fixture();
        f.reservations_api.respond(
            201,
            json!({ "id": 9, "start_date": "2024-03-01", "end_date": "2024-03-05", "users_id": 7, "rooms_id": 4 }),
        );
        let session = owner_session();

        let reservation = Reservation {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            room_id: Some(EntityId::Num(4)),
            ..Reservation::default()
        };
        f.stores
            .create_reservation(&session, reservation)
            .await
            .unwrap();

        let sent = f.reservations_api.calls()[0].body.clone().unwrap();
        assert_eq!(sent["users_id"], 7);
    }

    #[tokio::test]
    async fn refresh_all_fills_every_collection_independently() {
        let f = fixture();
        f.hotels_api.respond(200, json!([{ "id": 1, "users_id": 7 }]));
        f.rooms_api.respond(200, json!([{ "id": 4, "hotels_id": 1 }]));
        f.reservations_api.respond(500, json!({}));
        f.subscriptions_api.respond(200, json!([{ "id": 2, "type_plan": "anual" }]));
        f.users_api.respond(200, json!([{ "id": 7 }]));

        f.stores.refresh_all().await;

        assert_eq!(f.stores.hotels.len(), 1);
        assert_eq!(f.stores.rooms.len(), 1);
        // One collection failing does not poison the others.
        assert!(f.stores.reservations.is_empty());
        assert_eq!(f.stores.reservations.errors().len(), 1);
        assert_eq!(f.stores.subscriptions.len(), 1);
        assert_eq!(f.stores.users.len(), 1);
    }

    #[tokio::test]
    async fn rooms_by_hotel_refetches_then_filters() {
        let f = fixture();
        f.rooms_api.respond(
            200,
            json!([
                { "id": 4, "hotels_id": 1 },
                { "id": 5, "hotels_id": 2 },
                { "id": 6, "hotels_id": 1 }
            ]),
        );

        let rooms = f.stores.rooms_by_hotel(&EntityId::Num(1)).await;

        assert_eq!(rooms.len(), 2);
        assert_eq!(f.stores.rooms.len(), 3);
    }

    #[tokio::test]
    async fn hotel_reservations_view_uses_session_role() {
        let f = fixture();
        f.hotels_api
            .respond(200, json!([{ "id": 1, "users_id": 7 }, { "id": 2, "users_id": 8 }]));
        f.rooms_api
            .respond(200, json!([{ "id": 4, "hotels_id": 1 }, { "id": 5, "hotels_id": 2 }]));
        f.reservations_api.respond(
            200,
            json!([
                { "id": 100, "rooms_id": 4, "users_id": 3, "start_date": "2024-03-01", "end_date": "2024-03-05" },
                { "id": 200, "rooms_id": 5, "users_id": 3, "start_date": "2024-03-01", "end_date": "2024-03-05" }
            ]),
        );
        f.subscriptions_api.respond(200, json!([]));
        f.users_api.respond(200, json!([]));
        f.stores.refresh_all().await;

        let session = owner_session();
        let view = f.stores.hotel_reservations(&session);

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, Some(EntityId::Num(100)));

        // Logged out: nothing, regardless of collection contents.
        session.logout();
        assert!(f.stores.hotel_reservations(&session).is_empty());
    }

    #[tokio::test]
    async fn availability_wrapper_reads_current_snapshot() {
        let f = fixture();
        f.reservations_api.respond(
            200,
            json!([{ "id": 1, "rooms_id": 4, "users_id": 3, "start_date": "2024-01-10", "end_date": "2024-01-15" }]),
        );
        f.stores.reservations.fetch_all().await;

        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert!(!f.stores.is_room_available(&EntityId::Num(4), start, end, None));

        let start = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        assert!(f.stores.is_room_available(&EntityId::Num(4), start, end, None));
    }
}
