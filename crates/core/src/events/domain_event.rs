//! Domain event types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about the editing session. Runtime
/// adapters translate them into platform-specific actions (calendar cell
/// refresh, toast notifications, cache invalidation).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A recalculated price sheet was applied to the active draft.
    PriceSheetApplied {
        session_id: Uuid,
        /// Token of the recalculation request the sheet answers.
        request_token: u64,
    },

    /// A recalculation failed; the previously applied sheet stays in effect.
    RecalculationFailed { session_id: Uuid, reason: String },

    /// A reservation draft was submitted and persisted.
    ReservationSubmitted {
        session_id: Uuid,
        reservation_id: String,
    },

    /// A room close was persisted.
    RoomCloseSaved {
        session_id: Uuid,
        reservation_id: String,
    },

    /// A room close was deleted.
    RoomCloseDeleted {
        session_id: Uuid,
        reservation_id: String,
    },
}

impl DomainEvent {
    pub fn price_sheet_applied(session_id: Uuid, request_token: u64) -> Self {
        Self::PriceSheetApplied {
            session_id,
            request_token,
        }
    }

    pub fn recalculation_failed(session_id: Uuid, reason: impl Into<String>) -> Self {
        Self::RecalculationFailed {
            session_id,
            reason: reason.into(),
        }
    }

    pub fn reservation_submitted(session_id: Uuid, reservation_id: impl Into<String>) -> Self {
        Self::ReservationSubmitted {
            session_id,
            reservation_id: reservation_id.into(),
        }
    }

    pub fn room_close_saved(session_id: Uuid, reservation_id: impl Into<String>) -> Self {
        Self::RoomCloseSaved {
            session_id,
            reservation_id: reservation_id.into(),
        }
    }

    pub fn room_close_deleted(session_id: Uuid, reservation_id: impl Into<String>) -> Self {
        Self::RoomCloseDeleted {
            session_id,
            reservation_id: reservation_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_event_serialization() {
        let session_id = Uuid::new_v4();
        let event = DomainEvent::price_sheet_applied(session_id, 7);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("price_sheet_applied"));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::PriceSheetApplied {
                session_id: sid,
                request_token,
            } => {
                assert_eq!(sid, session_id);
                assert_eq!(request_token, 7);
            }
            _ => panic!("Expected PriceSheetApplied"),
        }
    }
}
