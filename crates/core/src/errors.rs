//! Core error types for the reservation pricing engine.
//!
//! This module defines transport-agnostic error types. Storage- and
//! HTTP-specific errors are converted to these types by the adapters that
//! own those concerns.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the reservation pricing engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Check-in must be strictly before check-out.
    #[error("Invalid date range: check-in {checkin} must be before check-out {checkout}")]
    InvalidDateRange {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    /// A rate plan must be selected before prices can be confirmed.
    #[error("A rate plan is required before the reservation can be priced")]
    PlanRequired,

    /// A night is missing its room assignment at save time.
    #[error("Night {day} has no room assigned")]
    IncompleteAssignment { day: NaiveDate },

    /// The rate plan has no nightly rate covering the given night.
    #[error("No nightly rate for {day} in rate plan '{plan_id}'")]
    MissingNightlyRate { day: NaiveDate, plan_id: String },

    /// A pricing recalculation failed or timed out. Recoverable: the last
    /// applied price sheet stays in effect.
    #[error("Price recalculation failed: {0}")]
    RecalculationFailed(String),

    #[error("Unknown rate plan '{0}'")]
    MissingRatePlan(String),

    #[error("No usable rate: {0}")]
    MissingRate(String),

    #[error("Room assignment rejected: {0}")]
    MissingRoom(String),

    /// Monetary amounts in different currencies cannot be combined.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Rejection reported by the persistence collaborator. Returns the
    /// draft to price confirmation with the reason attached.
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Surfaced from the permission collaborator, never generated here.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
