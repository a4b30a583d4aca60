use std::fs;
use std::path::PathBuf;

use super::{codec, TaskStore};
use crate::error::Result;
use crate::model::Task;

/// File-backed store: the whole list lives in one UTF-8 text file, one task
/// per line in the codec format. A missing file is an empty list, and the
/// first save creates any missing parent directories.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(codec::decode)
            .collect()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = String::new();
        for task in tasks {
            content.push_str(&codec::encode(task));
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn load_missing_file_returns_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("tasks.txt");
        let mut store = FileStore::new(&path);

        store.save(&[Task::todo("read book")]).unwrap();
        assert!(path.exists());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "T | 0 | read book\n"
        );
    }

    #[test]
    fn save_then_load_round_trips_all_variants() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("tasks.txt"));

        let due = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 1, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 12)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();

        let mut done = Task::todo("read book");
        done.mark_done();
        let tasks = vec![
            done,
            Task::deadline("return book", due),
            Task::event("book club", start, end),
        ];

        store.save(&tasks).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("tasks.txt"));

        store
            .save(&[Task::todo("first"), Task::todo("second")])
            .unwrap();
        store.save(&[Task::todo("only")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description(), "only");
    }

    #[test]
    fn load_surfaces_corrupted_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T | 0 | fine\ngarbage line\n").unwrap();

        let store = FileStore::new(&path);
        assert!(store.load().is_err());
    }
}
