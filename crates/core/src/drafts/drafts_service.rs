use std::sync::Arc;

use log::{debug, error};
use uuid::Uuid;

use super::drafts_model::{CloseRoomDraft, DraftStage, ReservationDraft};
use super::drafts_traits::ReservationStoreTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};

/// Orchestrates draft submission against the persistence collaborator.
///
/// Structural problems (missing plan, unassigned nights, bad guest data)
/// are caught before anything reaches the store. A store-side rejection
/// re-enters price confirmation with the reason attached instead of
/// discarding the user's edits.
pub struct DraftService {
    session_id: Uuid,
    store: Arc<dyn ReservationStoreTrait>,
    events: Arc<dyn DomainEventSink>,
}

impl DraftService {
    pub fn new(
        session_id: Uuid,
        store: Arc<dyn ReservationStoreTrait>,
        events: Arc<dyn DomainEventSink>,
    ) -> Self {
        DraftService {
            session_id,
            store,
            events,
        }
    }

    /// `AwaitingPriceConfirmation -> Submitted`.
    ///
    /// Requires a fully assigned price sheet; on a backend rejection the
    /// draft stays in `AwaitingPriceConfirmation` with the rejection
    /// reason surfaced, and the error is returned to the caller.
    pub async fn submit_reservation(&self, draft: &mut ReservationDraft) -> Result<String> {
        if draft.stage() != DraftStage::AwaitingPriceConfirmation {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Draft is in stage {:?}, expected AwaitingPriceConfirmation",
                draft.stage()
            ))));
        }
        draft.guest.validate()?;
        let sheet = draft.price_sheet().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("price sheet".to_string()))
        })?;
        sheet.finalize_for_save()?;

        match self.store.save_reservation(draft).await {
            Ok(reservation_id) => {
                draft.mark_submitted();
                debug!(
                    "Reservation {} submitted for session {}",
                    reservation_id, self.session_id
                );
                self.events.emit(DomainEvent::reservation_submitted(
                    self.session_id,
                    reservation_id.clone(),
                ));
                Ok(reservation_id)
            }
            Err(Error::Validation(reason)) => {
                draft.rejection = Some(reason.to_string());
                error!(
                    "Reservation submission rejected for session {}: {}",
                    self.session_id, reason
                );
                Err(Error::Validation(reason))
            }
            Err(err) => {
                error!(
                    "Reservation submission failed for session {}: {}",
                    self.session_id, err
                );
                Err(err)
            }
        }
    }

    /// Persists a room close built in the closing-room stage.
    pub async fn submit_room_close(&self, draft: &CloseRoomDraft) -> Result<String> {
        let reservation_id = self.store.save_room_close(draft).await?;
        debug!(
            "Room {} closed {}..{} for session {}",
            draft.room_id,
            draft.stay.checkin(),
            draft.stay.checkout(),
            self.session_id
        );
        self.events.emit(DomainEvent::room_close_saved(
            self.session_id,
            reservation_id.clone(),
        ));
        Ok(reservation_id)
    }

    /// Replaces a saved room close with the given draft. The draft-side
    /// validation is the same as for a fresh close.
    pub async fn update_room_close(
        &self,
        reservation_id: &str,
        draft: &CloseRoomDraft,
    ) -> Result<()> {
        self.store.update_room_close(reservation_id, draft).await?;
        self.events.emit(DomainEvent::room_close_saved(
            self.session_id,
            reservation_id,
        ));
        Ok(())
    }

    /// Removes a previously saved room close.
    pub async fn delete_room_close(&self, reservation_id: &str) -> Result<()> {
        self.store.delete_room_close(reservation_id).await?;
        self.events.emit(DomainEvent::room_close_deleted(
            self.session_id,
            reservation_id,
        ));
        Ok(())
    }
}
