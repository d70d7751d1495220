//! Room and room type domain models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A bookable room category (e.g. "Double", "Family Suite").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: String,
    pub name: String,
}

/// A physical room belonging to one room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub room_type_id: String,
}

/// Lookup over the rooms of a property, used to validate per-night room
/// assignments against the room type selected for a reservation segment.
#[derive(Debug, Clone, Default)]
pub struct RoomInventory {
    rooms: HashMap<String, Room>,
}

impl RoomInventory {
    pub fn new(rooms: Vec<Room>) -> Self {
        RoomInventory {
            rooms: rooms.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    pub fn get(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    /// True when the room exists and belongs to the given room type.
    pub fn belongs_to(&self, room_id: &str, room_type_id: &str) -> bool {
        self.rooms
            .get(room_id)
            .map(|r| r.room_type_id == room_type_id)
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
