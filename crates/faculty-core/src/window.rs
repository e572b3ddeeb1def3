//! Half-open time windows.

use chrono::{DateTime, TimeDelta, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// `[start, end)`: includes `start`, excludes `end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidWindow` if `start` is after `end`. An empty
    /// window (`start == end`) is allowed and contains nothing.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days` days ending at `now` (exclusive).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::WindowOutOfRange` if the start would fall before
    /// the earliest representable date.
    pub fn last_days(now: DateTime<Utc>, days: u32) -> Result<Self, CoreError> {
        let start = TimeDelta::try_days(i64::from(days))
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or(CoreError::WindowOutOfRange { days })?;
        Ok(Self { start, end: now })
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}
