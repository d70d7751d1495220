//! Drafts module - in-progress reservation and room-close entries.

mod drafts_model;
mod drafts_service;
mod drafts_traits;


pub use drafts_model::{
    CloseRoomDraft, DraftStage, GuestDetails, ReservationDraft, RoomCloseReason,
};
pub use drafts_service::DraftService;
pub use drafts_traits::ReservationStoreTrait;
