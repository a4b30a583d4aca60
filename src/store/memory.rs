use super::TaskStore;
use crate::error::{Result, TasklineError};
use crate::model::Task;

/// In-memory store for tests: no filesystem, and an optional failure switch
/// for exercising the save-error path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tasks: Vec<Task>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every `save` fails, for testing that save failures are
    /// surfaced without rolling back in-memory state.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// How many times `save` has been called (and succeeded).
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// The most recently saved snapshot.
    pub fn saved(&self) -> &[Task] {
        &self.tasks
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        if self.fail_saves {
            return Err(TasklineError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        self.tasks = tasks.to_vec();
        self.save_count += 1;
        Ok(())
    }
}
