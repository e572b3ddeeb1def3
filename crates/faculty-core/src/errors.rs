//! Cross-cutting error types for the faculty task store.
//!
//! Storage-specific errors (`DatabaseError`) and configuration errors
//! (`ConfigError`) live in their own crates. The binary converges them
//! through `anyhow`.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::dto::ValidationReport;

/// Errors that can be raised by any faculty crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A time window whose start lies after its end.
    #[error("Invalid time window: start {start} is after end {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A look-back of `days` that reaches before the earliest representable date.
    #[error("Window of {days} days reaches outside the supported date range")]
    WindowOutOfRange { days: u32 },

    /// Input failed field-level validation.
    #[error("Validation error: {0}")]
    Validation(ValidationReport),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
