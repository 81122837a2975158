// ── Wire-to-domain normalization ──
//
// Bridges `crate::record` wire shapes into canonical `crate::model`
// types. Normalization fills defaults for missing fields, parses strings
// into strong types, and leaves every relational link as the foreign-key
// scalar plus `None` -- a nested raw blob in the payload is never turned
// into a typed entity here.

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use hostly_api::ApiResponse;

use crate::model::{
    EntityId, Hotel, PlanType, Reservation, Room, RoomType, Subscription, User, UserRole,
};
use crate::record::{
    HotelRecord, ReservationRecord, RoomRecord, SubscriptionRecord, UserRecord,
};

// ── Entity trait ────────────────────────────────────────────────────

/// A typed, defaulted, id-bearing domain type with a wire-record twin.
///
/// `from_record` / `to_record` are total: any record shape maps to an
/// entity and back. The pair is lossless for records without nested
/// payload fragments.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The serde wire shape for this entity kind.
    type Record: Serialize + DeserializeOwned + Send;

    /// Payload key when the backend wraps the collection in an object
    /// (`{"reservations": [...]}`) instead of a bare list.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<&EntityId>;

    fn from_record(record: Self::Record) -> Self;

    fn to_record(&self) -> Self::Record;
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Parse an ISO `YYYY-MM-DD` date, treating empty/unparseable as absent.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Render a date back to the wire format; absent dates become `""`.
fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

// ── Response unwrapping ─────────────────────────────────────────────

/// Normalize a fetch-all response into entities.
///
/// Accepts both payload shapes the backend produces: a bare list, or an
/// object keyed by the collection name. A non-200 status or an
/// unrecognizable payload is reported and yields an empty vec --
/// callers never fail on a bad fetch.
pub fn to_entities<T: Entity>(resp: ApiResponse) -> Vec<T> {
    if resp.status != 200 {
        warn!(
            status = resp.status,
            reason = %resp.reason,
            collection = T::COLLECTION,
            "fetch failed"
        );
        return Vec::new();
    }

    let items = match resp.body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(T::COLLECTION) {
            Some(Value::Array(items)) => items,
            _ => {
                warn!(
                    collection = T::COLLECTION,
                    "payload carries neither a list nor a keyed collection"
                );
                return Vec::new();
            }
        },
        _ => {
            warn!(collection = T::COLLECTION, "unexpected payload shape");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T::Record>(item) {
            Ok(record) => Some(T::from_record(record)),
            Err(e) => {
                warn!(collection = T::COLLECTION, error = %e, "skipping malformed record");
                None
            }
        })
        .collect()
}

/// Normalize a single-record payload (get-by-id, create, update results).
pub fn to_entity<T: Entity>(body: Value) -> Option<T> {
    match serde_json::from_value::<T::Record>(body) {
        Ok(record) => Some(T::from_record(record)),
        Err(e) => {
            warn!(collection = T::COLLECTION, error = %e, "malformed record payload");
            None
        }
    }
}

// ── User ────────────────────────────────────────────────────────────

impl Entity for User {
    type Record = UserRecord;
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn from_record(record: Self::Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            password: record.password,
            role: record.type_user.parse::<UserRole>().unwrap_or_default(),
            subscription_id: record.subscription_id,
            subscription: None,
        }
    }

    fn to_record(&self) -> Self::Record {
        UserRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            type_user: self.role.to_string(),
            subscription_id: self.subscription_id.clone(),
            extra: serde_json::Map::new(),
        }
    }
}

// ── Hotel ───────────────────────────────────────────────────────────

impl Entity for Hotel {
    type Record = HotelRecord;
    const COLLECTION: &'static str = "hotels";

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn from_record(record: Self::Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            image: record.imagen,
            address: record.address,
            phone: record.phone,
            owner_id: record.users_id,
            owner: None,
        }
    }

    fn to_record(&self) -> Self::Record {
        HotelRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            imagen: self.image.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            users_id: self.owner_id.clone(),
            extra: serde_json::Map::new(),
        }
    }
}

// ── Room ────────────────────────────────────────────────────────────

impl Entity for Room {
    type Record = RoomRecord;
    const COLLECTION: &'static str = "rooms";

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn from_record(record: Self::Record) -> Self {
        Self {
            id: record.id,
            price: record.price,
            room_type: record.type_room.parse::<RoomType>().unwrap_or_default(),
            hotel_id: record.hotels_id,
            hotel: None,
        }
    }

    fn to_record(&self) -> Self::Record {
        RoomRecord {
            id: self.id.clone(),
            price: self.price,
            type_room: self.room_type.to_string(),
            hotels_id: self.hotel_id.clone(),
            extra: serde_json::Map::new(),
        }
    }
}

// ── Reservation ─────────────────────────────────────────────────────

impl Entity for Reservation {
    type Record = ReservationRecord;
    const COLLECTION: &'static str = "reservations";

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn from_record(record: Self::Record) -> Self {
        Self {
            id: record.id,
            start_date: parse_date(&record.start_date),
            end_date: parse_date(&record.end_date),
            renter_id: record.users_id,
            room_id: record.rooms_id,
            renter: None,
            room: None,
        }
    }

    fn to_record(&self) -> Self::Record {
        ReservationRecord {
            id: self.id.clone(),
            start_date: format_date(self.start_date),
            end_date: format_date(self.end_date),
            users_id: self.renter_id.clone(),
            rooms_id: self.room_id.clone(),
            extra: serde_json::Map::new(),
        }
    }
}

// ── Subscription ────────────────────────────────────────────────────

impl Entity for Subscription {
    type Record = SubscriptionRecord;
    const COLLECTION: &'static str = "subscriptions";

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn from_record(record: Self::Record) -> Self {
        Self {
            id: record.id,
            plan: record.type_plan.parse::<PlanType>().unwrap_or_default(),
            user_id: record.users_id,
        }
    }

    fn to_record(&self) -> Self::Record {
        SubscriptionRecord {
            id: self.id.clone(),
            type_plan: self.plan.to_string(),
            users_id: self.user_id.clone(),
            extra: serde_json::Map::new(),
        }
    }
}
