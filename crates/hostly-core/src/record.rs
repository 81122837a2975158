// ── Wire records ──
//
// Serde shapes matching the backend's JSON, field names included
// (`users_id`, `type_room`, `imagen`, ...). Every field defaults so a
// sparse record still deserializes; unmodelled fields -- nested entity
// blobs included -- land in `extra` and are never promoted to typed
// links. These types exist only at the transport boundary: the
// normalizer in `crate::convert` turns them into `crate::model` types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::EntityId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub type_user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<EntityId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    /// Image URL; the backend predates the English field name.
    #[serde(default)]
    pub imagen: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_id: Option<EntityId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub type_room: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotels_id: Option<EntityId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    /// ISO `YYYY-MM-DD`; empty when unset.
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms_id: Option<EntityId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub type_plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_id: Option<EntityId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
