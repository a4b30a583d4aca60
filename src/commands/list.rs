use crate::commands::{CmdMessage, CmdResult, DisplayTask};
use crate::error::Result;
use crate::tasklist::TaskList;

pub fn run(tasks: &TaskList) -> Result<CmdResult> {
    if tasks.is_empty() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::info("No tasks in your list."))
        );
    }

    let listed = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| DisplayTask::new(i + 1, task.clone()))
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    #[test]
    fn empty_list_reports_no_tasks() {
        let result = run(&TaskList::new()).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "No tasks in your list.");
    }

    #[test]
    fn lists_tasks_with_one_based_numbers() {
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("read book"));
        tasks.add(Task::todo("write review"));

        let result = run(&tasks).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].render(), "1.[T][ ] read book");
        assert_eq!(result.listed[1].render(), "2.[T][ ] write review");
    }
}
