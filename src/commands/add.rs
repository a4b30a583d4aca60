use chrono::NaiveDateTime;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Task;
use crate::store::TaskStore;
use crate::tasklist::TaskList;

pub fn todo<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    description: String,
) -> Result<CmdResult> {
    append(tasks, store, Task::todo(description))
}

pub fn deadline<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    description: String,
    due: NaiveDateTime,
) -> Result<CmdResult> {
    append(tasks, store, Task::deadline(description, due))
}

pub fn event<S: TaskStore>(
    tasks: &mut TaskList,
    store: &mut S,
    description: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<CmdResult> {
    append(tasks, store, Task::event(description, start, end))
}

fn append<S: TaskStore>(tasks: &mut TaskList, store: &mut S, task: Task) -> Result<CmdResult> {
    let rendered = task.render();
    tasks.add(task);
    store.save(tasks.as_slice())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Got it. I've added this task:"))
        .with_message(CmdMessage::info(rendered))
        .with_message(CmdMessage::info(format!(
            "Now you have {} tasks in the list.",
            tasks.len()
        ))))
}
