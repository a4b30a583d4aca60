use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TasklineError};
use crate::store::TaskStore;
use crate::tasklist::TaskList;

pub fn run<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    index: usize,
    invalid_message: &str,
) -> Result<CmdResult> {
    let removed = tasks
        .remove(index)
        .ok_or_else(|| TasklineError::InvalidTaskNumber(invalid_message.to_string()))?;
    store.save(tasks.as_slice())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Noted. I've removed this task:"))
        .with_message(CmdMessage::info(removed.render()))
        .with_message(CmdMessage::info(format!(
            "Now you have {} tasks in the list.",
            tasks.len()
        ))))
}
