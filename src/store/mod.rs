//! Storage abstraction for the task list.
//!
//! The [`TaskStore`] trait keeps persistence behind a seam so that:
//! - command logic can be tested with [`memory::InMemoryStore`] and no
//!   filesystem,
//! - the on-disk format stays an implementation detail of [`fs::FileStore`].
//!
//! Every save is a full rewrite of the whole list; the file and the
//! in-memory list are kept consistent by saving after each mutation. Writes
//! are not atomic, so a crash mid-write can truncate the file (accepted for
//! a single-user tool).
//!
//! The line format itself lives in [`codec`]: one task per line, fields
//! joined by ` | `, variant tag first.

use crate::error::Result;
use crate::model::Task;

pub mod codec;
pub mod fs;
pub mod memory;

/// Abstract interface for loading and saving the full task sequence.
pub trait TaskStore {
    /// Load all tasks. A store with no data yet returns an empty list.
    fn load(&self) -> Result<Vec<Task>>;

    /// Persist the full list, replacing whatever was stored before.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}
