//! Rooms module - room and room type models.

mod rooms_model;

pub use rooms_model::{Room, RoomInventory, RoomType};
