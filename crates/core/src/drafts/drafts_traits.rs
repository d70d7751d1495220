use async_trait::async_trait;

use super::drafts_model::{CloseRoomDraft, ReservationDraft};
use crate::errors::Result;

/// Persistence collaborator for drafts.
///
/// The core never talks to storage directly; submitted drafts cross this
/// boundary and ownership passes to the backend. A rejected save comes
/// back as `Error::Validation` with the backend's reason.
#[async_trait]
pub trait ReservationStoreTrait: Send + Sync {
    /// Persists a reservation draft, returning the new reservation id.
    async fn save_reservation(&self, draft: &ReservationDraft) -> Result<String>;

    /// Persists a room close, returning the id of the blocking entry.
    async fn save_room_close(&self, draft: &CloseRoomDraft) -> Result<String>;

    /// Replaces the period, reason, or notes of a saved room close.
    async fn update_room_close(&self, reservation_id: &str, draft: &CloseRoomDraft)
        -> Result<()>;

    /// Removes a previously saved room close.
    async fn delete_room_close(&self, reservation_id: &str) -> Result<()>;
}
