use chrono::NaiveDateTime;

use crate::commands::{number_selection, CmdMessage, CmdResult};
use crate::error::Result;
use crate::tasklist::TaskList;

/// Deadlines due within the next `window_days` days (inclusive at both
/// ends). "Now" is injected by the session's clock so the window is
/// deterministic under test.
pub fn run(tasks: &TaskList, window_days: u64, now: NaiveDateTime) -> Result<CmdResult> {
    let upcoming = tasks.upcoming_deadlines(window_days, now);
    if upcoming.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No deadlines due in the next {} days.",
            window_days
        ))));
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "Here are the deadlines due in the next {} days:",
            window_days
        )))
        .with_listed(number_selection(upcoming)))
}
