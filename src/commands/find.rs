use crate::commands::{number_selection, CmdMessage, CmdResult};
use crate::error::Result;
use crate::tasklist::TaskList;

pub fn run(tasks: &TaskList, keyword: &str) -> Result<CmdResult> {
    let matches = tasks.find(keyword);
    if matches.is_empty() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::info("No matching tasks found."))
        );
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(
            "Here are the matching tasks in your list:",
        ))
        .with_listed(number_selection(matches)))
}
