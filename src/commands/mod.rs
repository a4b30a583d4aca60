//! Business logic for each command family, plus the result payload types
//! the session hands back to whatever front-end is driving it.
//!
//! Command functions never print; they return a [`CmdResult`] describing
//! what to show. Mutating commands persist the full list through the store
//! before reporting success.

use crate::model::Task;

pub mod add;
pub mod delete;
pub mod find;
pub mod list;
pub mod on;
pub mod remind;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// A task paired with the 1-based number it is shown under.
#[derive(Debug, Clone)]
pub struct DisplayTask {
    pub number: usize,
    pub task: Task,
}

impl DisplayTask {
    pub fn new(number: usize, task: Task) -> Self {
        Self { number, task }
    }

    /// The list line for this entry, e.g. `1.[T][ ] read book`.
    pub fn render(&self) -> String {
        format!("{}.{}", self.number, self.task.render())
    }
}

/// What a command produced: messages to show, tasks to list, and whether
/// the session should end afterwards.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed: Vec<DisplayTask>,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<DisplayTask>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }
}

/// Numbers a borrowed selection with the 1-based positions of its own order
/// (search results, date queries, reminders).
pub(crate) fn number_selection(tasks: Vec<&Task>) -> Vec<DisplayTask> {
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| DisplayTask::new(i + 1, task.clone()))
        .collect()
}
