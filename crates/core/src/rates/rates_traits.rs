use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::pricing::PriceSheet;
use crate::utils::StayRange;

/// Request for a fresh price sheet covering one reservation segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSheetRequest {
    pub room_type_id: String,
    pub rate_plan_id: String,
    pub stay: StayRange,
    pub occupancy: u32,
}

/// Pricing-lookup collaborator.
///
/// The core does not know the transport behind this trait; it only
/// requires the request/response contract plus error signaling. The
/// lookup may be slow or fail - the recalculation controller owns
/// ordering, timeout, and staleness handling.
#[async_trait]
pub trait PriceLookupTrait: Send + Sync {
    async fn fetch_price_sheet(&self, request: &PriceSheetRequest) -> Result<PriceSheet>;
}
