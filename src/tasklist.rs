use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::model::{Task, TaskKind};

/// The ordered task collection. Insertion order is display order is on-disk
/// order; the list exclusively owns its tasks for the session's lifetime.
///
/// Indexing here is 0-based; the 1-based arithmetic for user input lives in
/// the parser. Out-of-range access returns `None` so each command can attach
/// its own error message.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks whose description contains the keyword, case-insensitively, in
    /// original order. Empty keywords are rejected upstream.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.trim().to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.description().to_lowercase().contains(&needle))
            .collect()
    }

    /// Deadlines and events falling on the given date, in list order.
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.occurs_on(date))
            .collect()
    }

    /// Deadline tasks due within `[now, now + window_days]` inclusive, in
    /// list order. The caller validates that the window is positive.
    pub fn upcoming_deadlines(&self, window_days: u64, now: NaiveDateTime) -> Vec<&Task> {
        let horizon = now
            .checked_add_days(Days::new(window_days))
            .unwrap_or(NaiveDateTime::MAX);
        self.tasks
            .iter()
            .filter(|task| match task.kind() {
                TaskKind::Deadline { due } => *due >= now && *due <= horizon,
                _ => false,
            })
            .collect()
    }
}
