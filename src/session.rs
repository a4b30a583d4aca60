//! The command dispatcher. One session owns the task list and the store;
//! each input line is handled independently: parse, run the handler,
//! persist after mutations, return a [`CmdResult`] payload or an error.

use chrono::{Local, NaiveDateTime};

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{Result, TasklineError};
use crate::parser;
use crate::store::TaskStore;
use crate::tasklist::TaskList;

const MSG_INVALID_TASK_NUMBER: &str = "Invalid task number.";
const MSG_TODO_EMPTY: &str = "The description of a todo cannot be empty.";
const MSG_DEADLINE_EMPTY: &str = "The description of a deadline cannot be empty.";
const MSG_DEADLINE_MISSING_BY: &str =
    "The deadline command must include '/by' followed by the due date/time.";
const MSG_EVENT_EMPTY: &str = "The description of an event cannot be empty.";
const MSG_EVENT_MISSING_TIME: &str =
    "The event command must include '/from' and '/to' followed by the respective date/time.";
const MSG_EVENT_END_BEFORE_START: &str = "The event end time must not be before the start time.";
const MSG_DATE_TIME_BAD: &str = "Date/time must be in yyyy-MM-dd HHmm format.";
const MSG_DELETE_INVALID: &str = "Invalid task number for deletion.";
const MSG_ON_MISSING_DATE: &str = "The on command must include a date in yyyy-MM-dd format.";
const MSG_FIND_MISSING_KEYWORD: &str = "The find command must include a keyword.";
const MSG_REMIND_BAD_WINDOW: &str = "The remind window must be a positive number of days.";

const DEFAULT_REMIND_DAYS: u64 = 3;

/// Source of "now" for the `remind` window. Injected so tests can pin the
/// wall clock.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock: local wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A single interactive session over a mutable task store.
pub struct Session<S: TaskStore> {
    tasks: TaskList,
    store: S,
    clock: Box<dyn Clock>,
}

impl<S: TaskStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        Self {
            tasks: TaskList::new(),
            store,
            clock,
        }
    }

    /// Populates the list from the store. On failure the session stays
    /// usable with an empty list; the caller decides how to report it.
    pub fn load(&mut self) -> Result<()> {
        self.tasks = TaskList::from_tasks(self.store.load()?);
        Ok(())
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn welcome(&self) -> CmdResult {
        CmdResult::default()
            .with_message(CmdMessage::info("Hello! I'm Taskline."))
            .with_message(CmdMessage::info("What can I do for you?"))
    }

    /// Processes one input line. Mutating commands save the full list
    /// before reporting; a failed save propagates as an error without
    /// rolling back the in-memory change.
    pub fn handle(&mut self, line: &str) -> Result<CmdResult> {
        let input = line.trim();
        if input.is_empty() {
            return Err(TasklineError::EmptyInput);
        }

        match parser::command_word(input).as_str() {
            "todo" => self.handle_todo(input),
            "deadline" => self.handle_deadline(input),
            "event" => self.handle_event(input),
            "list" => commands::list::run(&self.tasks),
            "find" => self.handle_find(input),
            "on" => self.handle_on(input),
            "remind" => self.handle_remind(input),
            "mark" => self.handle_mark(input, true),
            "unmark" => self.handle_mark(input, false),
            "delete" => self.handle_delete(input),
            "bye" => Ok(CmdResult::default()
                .with_message(CmdMessage::info("Bye. Hope to see you again soon!"))
                .with_exit()),
            _ => Err(TasklineError::UnknownCommand),
        }
    }

    fn handle_todo(&mut self, input: &str) -> Result<CmdResult> {
        let description = parser::remainder(input);
        if description.is_empty() {
            return Err(TasklineError::MissingField(MSG_TODO_EMPTY.to_string()));
        }
        commands::add::todo(&mut self.tasks, &mut self.store, description.to_string())
    }

    fn handle_deadline(&mut self, input: &str) -> Result<CmdResult> {
        // Split the whole line so `deadline /by ...` still reaches the
        // empty-description check; the space-bounded delimiter would never
        // follow a trimmed, empty description otherwise. First-occurrence
        // split only; a description containing " /by " yields undefined
        // segmentation rather than an error.
        let Some((before_by, by_text)) = input.split_once(" /by ") else {
            return Err(TasklineError::MissingField(
                MSG_DEADLINE_MISSING_BY.to_string(),
            ));
        };

        let description = parser::remainder(before_by);
        if description.is_empty() {
            return Err(TasklineError::MissingField(MSG_DEADLINE_EMPTY.to_string()));
        }

        let due = parser::parse_date_time(by_text, MSG_DATE_TIME_BAD)?;
        commands::add::deadline(&mut self.tasks, &mut self.store, description.to_string(), due)
    }

    fn handle_event(&mut self, input: &str) -> Result<CmdResult> {
        let remainder = parser::remainder(input);
        let Some((description, timing)) = remainder.split_once("/from") else {
            return Err(TasklineError::MissingField(
                MSG_EVENT_MISSING_TIME.to_string(),
            ));
        };
        // Also covers a "/to" that appears before "/from".
        let Some((from_text, to_text)) = timing.split_once("/to") else {
            return Err(TasklineError::MissingField(
                MSG_EVENT_MISSING_TIME.to_string(),
            ));
        };

        let description = description.trim();
        if description.is_empty() {
            return Err(TasklineError::MissingField(MSG_EVENT_EMPTY.to_string()));
        }

        let start = parser::parse_date_time(from_text, MSG_DATE_TIME_BAD)?;
        let end = parser::parse_date_time(to_text, MSG_DATE_TIME_BAD)?;
        if end < start {
            return Err(TasklineError::InvalidDateTime(
                MSG_EVENT_END_BEFORE_START.to_string(),
            ));
        }

        commands::add::event(
            &mut self.tasks,
            &mut self.store,
            description.to_string(),
            start,
            end,
        )
    }

    fn handle_find(&mut self, input: &str) -> Result<CmdResult> {
        let keyword = parser::remainder(input);
        if keyword.is_empty() {
            return Err(TasklineError::MissingField(
                MSG_FIND_MISSING_KEYWORD.to_string(),
            ));
        }
        commands::find::run(&self.tasks, keyword)
    }

    fn handle_on(&mut self, input: &str) -> Result<CmdResult> {
        let date_text = parser::remainder(input);
        if date_text.is_empty() {
            return Err(TasklineError::MissingField(MSG_ON_MISSING_DATE.to_string()));
        }
        let date = parser::parse_date(date_text, MSG_ON_MISSING_DATE)?;
        commands::on::run(&self.tasks, date)
    }

    fn handle_remind(&mut self, input: &str) -> Result<CmdResult> {
        let remainder = parser::remainder(input);
        let window_days = if remainder.is_empty() {
            DEFAULT_REMIND_DAYS
        } else {
            match remainder.parse::<u64>() {
                Ok(days) if days > 0 => days,
                _ => {
                    return Err(TasklineError::InvalidReminderWindow(
                        MSG_REMIND_BAD_WINDOW.to_string(),
                    ))
                }
            }
        };
        commands::remind::run(&self.tasks, window_days, self.clock.now())
    }

    fn handle_mark(&mut self, input: &str, done: bool) -> Result<CmdResult> {
        let index = parser::parse_index(input, MSG_INVALID_TASK_NUMBER)?;
        if done {
            commands::status::mark(
                &mut self.tasks,
                &mut self.store,
                index,
                MSG_INVALID_TASK_NUMBER,
            )
        } else {
            commands::status::unmark(
                &mut self.tasks,
                &mut self.store,
                index,
                MSG_INVALID_TASK_NUMBER,
            )
        }
    }

    fn handle_delete(&mut self, input: &str) -> Result<CmdResult> {
        let index = parser::parse_index(input, MSG_DELETE_INVALID)?;
        commands::delete::run(&mut self.tasks, &mut self.store, index, MSG_DELETE_INVALID)
    }
}
