//! Unified application error types for the box-office engine.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
///
/// Every kind here is recoverable and caller-correctable; none is fatal
/// to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested record (order, ticket, auditorium) was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// An internal invariant was violated; only the affected showtime's
    /// operations are halted, never the whole service.
    Internal,
    /// The requested seat id does not exist in the showtime's inventory.
    SeatNotFound,
    /// The seat is sold, or held by a different order and not expired.
    SeatUnavailable,
    /// The requested showtime was not found.
    EventNotFound,
    /// The candidate window overlaps another scheduled showtime
    /// (turnaround buffer included) on the same auditorium.
    EventConflict,
    /// The time window is degenerate (`end <= start`).
    InvalidWindow,
    /// The operation is not legal for the entity's current state
    /// (e.g. confirming a seat not held by the caller's order).
    InvalidState,
    /// More seats were requested than the auditorium can hold.
    CapacityExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::SeatNotFound => write!(f, "SEAT_NOT_FOUND"),
            Self::SeatUnavailable => write!(f, "SEAT_UNAVAILABLE"),
            Self::EventNotFound => write!(f, "EVENT_NOT_FOUND"),
            Self::EventConflict => write!(f, "EVENT_CONFLICT"),
            Self::InvalidWindow => write!(f, "INVALID_WINDOW"),
            Self::InvalidState => write!(f, "INVALID_STATE"),
            Self::CapacityExceeded => write!(f, "CAPACITY_EXCEEDED"),
        }
    }
}

/// The unified application error used throughout the engine.
///
/// Crate-specific failures are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls so the whole workspace shares a single
/// error type at its boundaries.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a seat-not-found error naming the offending seat.
    pub fn seat_not_found(seat: impl fmt::Display) -> Self {
        Self::new(ErrorKind::SeatNotFound, format!("Seat {seat} does not exist"))
    }

    /// Create a seat-unavailable error naming the offending seat.
    pub fn seat_unavailable(seat: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::SeatUnavailable,
            format!("Seat {seat} is not available"),
        )
    }

    /// Create an event-not-found error for a showtime id.
    pub fn event_not_found(showtime: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::EventNotFound,
            format!("Showtime {showtime} not found"),
        )
    }

    /// Create an event-conflict error.
    pub fn event_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EventConflict, message)
    }

    /// Create an invalid-window error.
    pub fn invalid_window(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWindow, message)
    }

    /// Create an invalid-state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidState, message)
    }

    /// Create a capacity-exceeded error.
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapacityExceeded, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
