use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TasklineError};
use crate::store::TaskStore;
use crate::tasklist::TaskList;

pub fn mark<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    index: usize,
    invalid_message: &str,
) -> Result<CmdResult> {
    set_done(tasks, store, index, invalid_message, true)
}

pub fn unmark<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    index: usize,
    invalid_message: &str,
) -> Result<CmdResult> {
    set_done(tasks, store, index, invalid_message, false)
}

fn set_done<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    index: usize,
    invalid_message: &str,
    done: bool,
) -> Result<CmdResult> {
    let task = tasks
        .get_mut(index)
        .ok_or_else(|| TasklineError::InvalidTaskNumber(invalid_message.to_string()))?;

    if done {
        task.mark_done();
    } else {
        task.mark_undone();
    }
    let rendered = task.render();
    store.save(tasks.as_slice())?;

    let header = if done {
        "Nice! I've marked this task as done:"
    } else {
        "OK, I've marked this task as not done yet:"
    };
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(header))
        .with_message(CmdMessage::info(rendered)))
}
