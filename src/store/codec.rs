//! The pipe-delimited line format: one task per line, fields joined by
//! ` | `. Descriptions containing the ` | ` separator are not supported
//! (same limitation as splitting on it when reading).
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | 2026-01-15T18:00
//! E | 0 | book club | 2026-01-10T09:00 | 2026-01-12T18:00
//! ```

use chrono::{NaiveDateTime, Timelike};

use crate::error::{Result, TasklineError};
use crate::model::{Task, TaskKind};

const SEPARATOR: &str = " | ";

/// Encodes one task as one line (without a trailing newline).
pub fn encode(task: &Task) -> String {
    let status = if task.is_done() { "1" } else { "0" };
    match task.kind() {
        TaskKind::Todo => format!("T{sep}{status}{sep}{}", task.description(), sep = SEPARATOR),
        TaskKind::Deadline { due } => format!(
            "D{sep}{status}{sep}{}{sep}{}",
            task.description(),
            encode_date_time(due),
            sep = SEPARATOR
        ),
        TaskKind::Event { start, end } => format!(
            "E{sep}{status}{sep}{}{sep}{}{sep}{}",
            task.description(),
            encode_date_time(start),
            encode_date_time(end),
            sep = SEPARATOR
        ),
    }
}

/// Decodes one line back into a task. Unknown variant tags, lines with
/// fewer fields than the variant needs, empty descriptions, and event
/// ranges that end before they start are all corrupted data.
pub fn decode(line: &str) -> Result<Task> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(corrupted(line));
    }

    let description = fields[2];
    if description.is_empty() {
        return Err(corrupted(line));
    }

    let mut task = match fields[0] {
        "T" => Task::todo(description),
        "D" => {
            if fields.len() < 4 {
                return Err(corrupted(line));
            }
            Task::deadline(description, decode_date_time(fields[3], line)?)
        }
        "E" => {
            if fields.len() < 5 {
                return Err(corrupted(line));
            }
            let start = decode_date_time(fields[3], line)?;
            let end = decode_date_time(fields[4], line)?;
            // Construction invariant; a hand-edited file can break it.
            if end < start {
                return Err(corrupted(line));
            }
            Task::event(description, start, end)
        }
        _ => return Err(corrupted(line)),
    };

    if fields[1] == "1" {
        task.mark_done();
    }
    Ok(task)
}

/// ISO local date-time, seconds omitted when zero — the writer never
/// produces seconds itself (command input has minute precision), but the
/// reader accepts both forms for hand-edited files.
fn encode_date_time(date_time: &NaiveDateTime) -> String {
    if date_time.second() == 0 {
        date_time.format("%Y-%m-%dT%H:%M").to_string()
    } else {
        date_time.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

fn decode_date_time(text: &str, line: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .map_err(|_| corrupted(line))
}

fn corrupted(line: &str) -> TasklineError {
    TasklineError::CorruptedData(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn encodes_each_variant() {
        assert_eq!(encode(&Task::todo("read book")), "T | 0 | read book");

        let mut deadline = Task::deadline("return book", dt(2026, 1, 15, 18, 0));
        deadline.mark_done();
        assert_eq!(
            encode(&deadline),
            "D | 1 | return book | 2026-01-15T18:00"
        );

        let event = Task::event("book club", dt(2026, 1, 10, 9, 0), dt(2026, 1, 12, 18, 0));
        assert_eq!(
            encode(&event),
            "E | 0 | book club | 2026-01-10T09:00 | 2026-01-12T18:00"
        );
    }

    #[test]
    fn round_trips_every_variant() {
        let mut done_todo = Task::todo("read book");
        done_todo.mark_done();
        let tasks = vec![
            done_todo,
            Task::deadline("return book", dt(2026, 1, 15, 18, 0)),
            Task::event("book club", dt(2026, 1, 10, 9, 0), dt(2026, 1, 12, 18, 30)),
        ];

        for task in &tasks {
            let decoded = decode(&encode(task)).unwrap();
            assert_eq!(&decoded, task);
        }
    }

    #[test]
    fn accepts_date_times_with_explicit_seconds() {
        let task = decode("D | 0 | return book | 2026-01-15T18:00:00").unwrap();
        assert_eq!(
            task,
            Task::deadline("return book", dt(2026, 1, 15, 18, 0))
        );
    }

    #[test]
    fn rejects_unknown_variant_tag() {
        let err = decode("X | 0 | mystery").unwrap_err();
        assert!(err.to_string().starts_with("Corrupted data file:"));
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(decode("T | 0").is_err());
        assert!(decode("D | 0 | return book").is_err());
        assert!(decode("E | 0 | book club | 2026-01-10T09:00").is_err());
        assert!(decode("D | 0 | return book | not-a-date").is_err());
    }

    #[test]
    fn rejects_empty_description() {
        assert!(decode("T | 0 | ").is_err());
        assert!(decode("D | 0 |  | 2026-01-15T18:00").is_err());
        assert!(decode("E | 0 |  | 2026-01-10T09:00 | 2026-01-12T18:00").is_err());
    }

    #[test]
    fn rejects_event_range_ending_before_start() {
        let err = decode("E | 0 | book club | 2026-01-12T18:00 | 2026-01-10T09:00").unwrap_err();
        assert!(err.to_string().starts_with("Corrupted data file:"));
    }
}
