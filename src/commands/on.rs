use chrono::NaiveDate;

use crate::commands::{number_selection, CmdMessage, CmdResult};
use crate::error::Result;
use crate::tasklist::TaskList;

pub fn run(tasks: &TaskList, date: NaiveDate) -> Result<CmdResult> {
    let matching = tasks.on_date(date);
    let mut result =
        CmdResult::default().with_message(CmdMessage::info(format!("Tasks on {}:", date)));

    if matching.is_empty() {
        result.add_message(CmdMessage::info("No deadlines/events on that date."));
    } else {
        result.listed = number_selection(matching);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn collects_deadlines_due_and_events_spanning_the_date() {
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("read book"));
        tasks.add(Task::deadline("return book", dt(2026, 1, 11, 18)));
        tasks.add(Task::event("book fair", dt(2026, 1, 10, 9), dt(2026, 1, 12, 18)));

        let result = run(&tasks, NaiveDate::from_ymd_opt(2026, 1, 11).unwrap()).unwrap();
        assert_eq!(result.messages[0].content, "Tasks on 2026-01-11:");
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].task.description(), "return book");
        assert_eq!(result.listed[1].task.description(), "book fair");
    }

    #[test]
    fn empty_date_reports_message() {
        let tasks = TaskList::new();
        let result = run(&tasks, NaiveDate::from_ymd_opt(2026, 1, 11).unwrap()).unwrap();
        assert_eq!(
            result.messages[1].content,
            "No deadlines/events on that date."
        );
    }
}
