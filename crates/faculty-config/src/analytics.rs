//! Analytics defaults.

use serde::{Deserialize, Serialize};

/// Largest accepted `default_window_days` (about a century).
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Window used by `summary` and `trends` when no range is given.
const fn default_window_days() -> u32 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_window_days: default_window_days(),
        }
    }
}
