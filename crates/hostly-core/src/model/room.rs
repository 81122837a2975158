// ── Room domain type ──

use strum::{Display, EnumString};

use super::entity_id::EntityId;
use super::hotel::Hotel;

/// Room category offered by a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RoomType {
    Individual,
    Doble,
    #[strum(default)]
    Other(String),
}

impl RoomType {
    /// Human-facing label; unknown tags fall back to the raw value.
    pub fn label(&self) -> String {
        match self {
            Self::Individual => "Individual".into(),
            Self::Doble => "Doble".into(),
            Self::Other(s) => s.clone(),
        }
    }
}

impl Default for RoomType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// A bookable room. Always belongs to exactly one hotel once created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    /// Server-assigned; `None` until persisted.
    pub id: Option<EntityId>,
    /// Nightly price; non-negative.
    pub price: f64,
    pub room_type: RoomType,
    pub hotel_id: Option<EntityId>,
    /// Resolved hotel. Only attached explicitly via
    /// [`with_hotel`](Self::with_hotel).
    pub hotel: Option<Hotel>,
}

impl Room {
    /// Attach a pre-validated hotel entity.
    pub fn with_hotel(mut self, hotel: Hotel) -> Self {
        self.hotel = Some(hotel);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_type_labels() {
        assert_eq!(RoomType::Individual.label(), "Individual");
        assert_eq!(RoomType::Doble.label(), "Doble");
        assert_eq!(RoomType::Other("suite".into()).label(), "suite");
    }
}
