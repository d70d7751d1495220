//! Draft domain models.
//!
//! A draft is an in-progress, unpersisted reservation or room-close
//! request. It lives for one editing session, is mutated as the user
//! edits plan/dates/occupancy, and is either submitted (ownership passes
//! to the backend) or discarded with no side effects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MAX_OCCUPANCY;
use crate::errors::{Error, Result, ValidationError};
use crate::pricing::PriceSheet;
use crate::rooms::RoomType;
use crate::utils::StayRange;

/// Stage of the draft builder state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftStage {
    /// The user has opened the dialog but not chosen an entry kind yet.
    #[default]
    SelectingType,
    /// Blocking a room without a guest reservation.
    ClosingRoom,
    /// Filling in guest, plan, and stay details.
    CreatingReservation,
    /// Reviewing per-night prices before confirming.
    AwaitingPriceConfirmation,
    /// Persisted; the backend owns the reservation now.
    Submitted,
    /// Cancelled before submission; no side effects.
    Discarded,
}

/// Reason a room is blocked without a guest reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomCloseReason {
    Maintenance,
    Renovation,
    PrivateUse,
    Other,
}

/// Guest contact details captured on the reservation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDetails {
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone_country_code: Option<String>,
    pub phone: Option<String>,
}

impl GuestDetails {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "guest name".to_string(),
            )));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Invalid guest email '{}'",
                    email
                ))));
            }
        }
        Ok(())
    }
}

/// An in-progress reservation being assembled in the editing dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub session_id: Uuid,
    stage: DraftStage,
    pub room_type_id: Option<String>,
    pub rate_plan_id: Option<String>,
    stay: Option<StayRange>,
    pub guest: GuestDetails,
    pub occupancy: u32,
    pub notes: String,
    price_sheet: Option<PriceSheet>,
    /// Reason reported by the backend when a submission was rejected.
    /// Kept on the draft so the user's edits survive the round trip.
    pub rejection: Option<String>,
}

impl ReservationDraft {
    pub fn new(session_id: Uuid) -> Self {
        ReservationDraft {
            session_id,
            stage: DraftStage::SelectingType,
            room_type_id: None,
            rate_plan_id: None,
            stay: None,
            guest: GuestDetails::default(),
            occupancy: 1,
            notes: String::new(),
            price_sheet: None,
            rejection: None,
        }
    }

    pub fn stage(&self) -> DraftStage {
        self.stage
    }

    pub fn stay(&self) -> Option<StayRange> {
        self.stay
    }

    pub fn price_sheet(&self) -> Option<&PriceSheet> {
        self.price_sheet.as_ref()
    }

    /// `SelectingType -> ClosingRoom`. Requires no further data; the
    /// close-room details live on a [`CloseRoomDraft`].
    pub fn start_room_close(&mut self) -> Result<()> {
        self.expect_stage(DraftStage::SelectingType)?;
        self.stage = DraftStage::ClosingRoom;
        Ok(())
    }

    /// `SelectingType -> CreatingReservation`. Requires at least one
    /// bookable room type.
    pub fn start_reservation(&mut self, room_types: &[RoomType]) -> Result<()> {
        self.expect_stage(DraftStage::SelectingType)?;
        if room_types.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "No room types available for reservation".to_string(),
            )));
        }
        self.stage = DraftStage::CreatingReservation;
        Ok(())
    }

    /// Sets the stay period. `InvalidDateRange` when check-in is not
    /// before check-out. Invalidates any previously fetched price sheet.
    pub fn set_stay(&mut self, checkin: NaiveDate, checkout: NaiveDate) -> Result<()> {
        self.expect_editable()?;
        self.stay = Some(StayRange::new(checkin, checkout)?);
        self.invalidate_price_sheet();
        Ok(())
    }

    pub fn set_room_type(&mut self, room_type_id: impl Into<String>) -> Result<()> {
        self.expect_editable()?;
        self.room_type_id = Some(room_type_id.into());
        self.invalidate_price_sheet();
        Ok(())
    }

    pub fn set_rate_plan(&mut self, rate_plan_id: impl Into<String>) -> Result<()> {
        self.expect_editable()?;
        self.rate_plan_id = Some(rate_plan_id.into());
        self.invalidate_price_sheet();
        Ok(())
    }

    pub fn set_occupancy(&mut self, occupancy: u32) -> Result<()> {
        self.expect_editable()?;
        if occupancy == 0 || occupancy > MAX_OCCUPANCY {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Occupancy {} out of range 1..={}",
                occupancy, MAX_OCCUPANCY
            ))));
        }
        self.occupancy = occupancy;
        self.invalidate_price_sheet();
        Ok(())
    }

    pub fn set_guest(&mut self, guest: GuestDetails) -> Result<()> {
        self.expect_editable()?;
        self.guest = guest;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<()> {
        self.expect_editable()?;
        self.notes = notes.into();
        Ok(())
    }

    /// `CreatingReservation -> AwaitingPriceConfirmation`. Fails with
    /// `PlanRequired` when no rate plan is selected and with a missing-
    /// field error when no stay has been set; an ill-ordered stay can
    /// never be stored (`set_stay` rejects it), so reaching this point
    /// means any stay present is valid.
    pub fn request_price_confirmation(&mut self) -> Result<()> {
        self.expect_stage(DraftStage::CreatingReservation)?;
        if self.rate_plan_id.is_none() {
            return Err(Error::PlanRequired);
        }
        if self.stay.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "stay".to_string(),
            )));
        }
        self.stage = DraftStage::AwaitingPriceConfirmation;
        Ok(())
    }

    /// Applies a freshly recalculated price sheet to the draft.
    pub fn apply_price_sheet(&mut self, sheet: PriceSheet) -> Result<()> {
        self.expect_editable()?;
        self.price_sheet = Some(sheet);
        Ok(())
    }

    /// Direct access for per-night edits on the applied sheet.
    pub fn price_sheet_mut(&mut self) -> Option<&mut PriceSheet> {
        self.price_sheet.as_mut()
    }

    /// Marks the draft persisted. Called by the draft service after a
    /// successful save.
    pub(crate) fn mark_submitted(&mut self) {
        self.stage = DraftStage::Submitted;
        self.rejection = None;
    }

    /// Discards the draft. Allowed at any stage before `Submitted`.
    pub fn cancel(&mut self) -> Result<()> {
        if self.stage == DraftStage::Submitted {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot cancel a submitted reservation draft".to_string(),
            )));
        }
        self.stage = DraftStage::Discarded;
        Ok(())
    }

    fn invalidate_price_sheet(&mut self) {
        self.price_sheet = None;
    }

    fn expect_stage(&self, expected: DraftStage) -> Result<()> {
        if self.stage != expected {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Draft is in stage {:?}, expected {:?}",
                self.stage, expected
            ))));
        }
        Ok(())
    }

    fn expect_editable(&self) -> Result<()> {
        match self.stage {
            DraftStage::CreatingReservation | DraftStage::AwaitingPriceConfirmation => Ok(()),
            stage => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Draft is not editable in stage {:?}",
                stage
            )))),
        }
    }
}

/// A room-close request: blocks a room for a period without a guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseRoomDraft {
    pub session_id: Uuid,
    pub room_id: String,
    pub stay: StayRange,
    pub reason: RoomCloseReason,
    pub notes: String,
}

impl CloseRoomDraft {
    pub fn new(
        session_id: Uuid,
        room_id: impl Into<String>,
        checkin: NaiveDate,
        checkout: NaiveDate,
        reason: RoomCloseReason,
        notes: impl Into<String>,
    ) -> Result<Self> {
        let room_id = room_id.into();
        if room_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "room".to_string(),
            )));
        }
        Ok(CloseRoomDraft {
            session_id,
            room_id,
            stay: StayRange::new(checkin, checkout)?,
            reason,
            notes: notes.into(),
        })
    }
}
