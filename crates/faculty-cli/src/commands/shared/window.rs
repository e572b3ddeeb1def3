use chrono::{DateTime, Utc};
use faculty_core::window::TimeWindow;

use crate::cli::root_commands::WindowArgs;

/// Turn optional `--from`/`--to` into a window.
///
/// A missing `--to` means `now`; a missing `--from` means `default_days`
/// before the end.
pub fn resolve_window(
    args: &WindowArgs,
    default_days: u32,
    now: DateTime<Utc>,
) -> anyhow::Result<TimeWindow> {
    let end = args.to.unwrap_or(now);
    let window = match args.from {
        Some(start) => TimeWindow::new(start, end)?,
        None => TimeWindow::last_days(end, default_days)?,
    };
    Ok(window)
}
