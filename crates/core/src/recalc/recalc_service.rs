//! Recalculation controller.
//!
//! Every relevant field change (plan, rate, stay, per-night room) asks
//! the pricing lookup for a fresh sheet. Requests can be issued faster
//! than responses arrive, so each one carries a monotonically increasing
//! token and only the response matching the newest token is applied -
//! last request wins. Responses for a closed session are inert.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use tokio::time::timeout;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::pricing::{aggregate, PriceSheet, Totals};
use crate::rates::{PriceLookupTrait, PriceSheetRequest};
use crate::settings::SessionConfig;

/// Outcome of one recalculation request.
#[derive(Debug, Clone, PartialEq)]
pub enum RecalcOutcome {
    /// The response was applied; displayed totals now match this sheet.
    Applied(Totals),
    /// A newer request was issued (or the session was closed) before
    /// this response landed; the response was discarded.
    Superseded,
}

struct RecalcState {
    /// Newest token handed out.
    latest_issued: u64,
    /// Highest token that finished while still being the newest.
    latest_settled: u64,
    /// Token of the currently applied sheet.
    applied_token: Option<u64>,
    sheet: Option<PriceSheet>,
    totals: Option<Totals>,
    last_failure: Option<String>,
    closed: bool,
}

/// Orchestrates price recalculations for one editing session.
///
/// Owns the applied price sheet and its derived totals; on failure the
/// last applied values stay in effect and the failure is surfaced
/// without discarding the draft.
pub struct RecalculationController {
    session_id: Uuid,
    config: SessionConfig,
    lookup: Arc<dyn PriceLookupTrait>,
    events: Arc<dyn DomainEventSink>,
    next_token: AtomicU64,
    state: Mutex<RecalcState>,
}

impl RecalculationController {
    pub fn new(
        session_id: Uuid,
        config: SessionConfig,
        lookup: Arc<dyn PriceLookupTrait>,
        events: Arc<dyn DomainEventSink>,
    ) -> Self {
        RecalculationController {
            session_id,
            config,
            lookup,
            events,
            next_token: AtomicU64::new(0),
            state: Mutex::new(RecalcState {
                latest_issued: 0,
                latest_settled: 0,
                applied_token: None,
                sheet: None,
                totals: None,
                last_failure: None,
                closed: false,
            }),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Fetches and applies a fresh price sheet for the given request.
    ///
    /// Returns `Applied` with the new totals when this request is still
    /// the newest one by the time its response arrives, `Superseded`
    /// when a newer request overtook it, and `RecalculationFailed` when
    /// the lookup errors or exceeds the configured timeout while still
    /// being the newest request.
    pub async fn recalculate(&self, request: PriceSheetRequest) -> Result<RecalcOutcome> {
        let token = self.next_token.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().unwrap();
            if state.closed {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Editing session is closed".to_string(),
                )));
            }
            state.latest_issued = token;
        }
        debug!(
            "Recalculation {} issued for session {} ({}..{})",
            token,
            self.session_id,
            request.stay.checkin(),
            request.stay.checkout()
        );

        let response = timeout(
            self.config.recalc_timeout,
            self.lookup.fetch_price_sheet(&request),
        )
        .await;

        let mut state = self.state.lock().unwrap();
        if state.closed {
            debug!(
                "Recalculation {} for closed session {} dropped",
                token, self.session_id
            );
            return Ok(RecalcOutcome::Superseded);
        }
        if token < state.latest_issued {
            debug!(
                "Recalculation {} superseded by {} in session {}",
                token, state.latest_issued, self.session_id
            );
            return Ok(RecalcOutcome::Superseded);
        }
        state.latest_settled = token;

        let failure = match response {
            Ok(Ok(sheet)) => match aggregate(&sheet, self.config.tax_rate_percent) {
                Ok(totals) => {
                    state.sheet = Some(sheet);
                    state.totals = Some(totals.clone());
                    state.applied_token = Some(token);
                    state.last_failure = None;
                    drop(state);
                    self.events
                        .emit(DomainEvent::price_sheet_applied(self.session_id, token));
                    return Ok(RecalcOutcome::Applied(totals));
                }
                Err(err) => err.to_string(),
            },
            Ok(Err(err)) => err.to_string(),
            Err(_) => format!(
                "No response within {:?}",
                self.config.recalc_timeout
            ),
        };

        // Failure of the newest request: keep the last applied sheet and
        // totals, surface the condition, let the next edit retry.
        warn!(
            "Recalculation {} failed for session {}: {}",
            token, self.session_id, failure
        );
        state.last_failure = Some(failure.clone());
        drop(state);
        self.events.emit(DomainEvent::recalculation_failed(
            self.session_id,
            failure.clone(),
        ));
        Err(Error::RecalculationFailed(failure))
    }

    /// Applies a local edit (accepted price, room assignment) to the
    /// applied sheet and recomputes totals in one step, so displayed
    /// totals can never drift from the sheet that produced them.
    pub fn edit_applied_sheet<F>(&self, edit: F) -> Result<Totals>
    where
        F: FnOnce(&mut PriceSheet) -> Result<()>,
    {
        let mut state = self.state.lock().unwrap();
        let mut sheet = state.sheet.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "No price sheet applied yet".to_string(),
            ))
        })?;
        edit(&mut sheet)?;
        let totals = aggregate(&sheet, self.config.tax_rate_percent)?;
        state.sheet = Some(sheet);
        state.totals = Some(totals.clone());
        Ok(totals)
    }

    /// True while a request newer than the last settled one is in flight.
    /// The UI shows its loading state off this.
    pub fn is_pending(&self) -> bool {
        let state = self.state.lock().unwrap();
        !state.closed && state.latest_issued > state.latest_settled
    }

    /// Whether the confirm action is allowed: the newest request must
    /// have completed successfully for the current draft state.
    pub fn can_confirm(&self) -> bool {
        let state = self.state.lock().unwrap();
        !state.closed
            && state.latest_issued > 0
            && state.applied_token == Some(state.latest_issued)
    }

    pub fn sheet(&self) -> Option<PriceSheet> {
        self.state.lock().unwrap().sheet.clone()
    }

    pub fn totals(&self) -> Option<Totals> {
        self.state.lock().unwrap().totals.clone()
    }

    pub fn last_failure(&self) -> Option<String> {
        self.state.lock().unwrap().last_failure.clone()
    }

    /// Closes the session. Any in-flight recalculation's eventual
    /// response is dropped instead of ghost-updating a dead draft.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap();
        state.closed = true;
    }
}
