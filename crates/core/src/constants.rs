/// Default bound on a pricing recalculation before it is treated as failed.
pub const DEFAULT_RECALC_TIMEOUT_SECS: u64 = 15;

/// Largest guest count a rate can be keyed by.
pub const MAX_OCCUPANCY: u32 = 20;

/// Decimal precision for display amounts (major units).
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
