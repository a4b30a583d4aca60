use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Variant-specific data for a task. Todos carry nothing beyond the shared
/// fields; deadlines and events carry their immutable date-times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { due: NaiveDateTime },
    Event { start: NaiveDateTime, end: NaiveDateTime },
}

/// A trackable item: a description, a done flag, and a [`TaskKind`].
///
/// The description and the variant data are fixed at construction; only the
/// done flag changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    is_done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description.into(), TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self::new(description.into(), TaskKind::Deadline { due })
    }

    /// Invariant: `end` must not precede `start`. The dispatcher rejects
    /// reversed ranges before construction.
    pub fn event(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        debug_assert!(end >= start, "event end must not precede start");
        Self::new(description.into(), TaskKind::Event { start, end })
    }

    fn new(description: String, kind: TaskKind) -> Self {
        debug_assert!(!description.is_empty(), "task description must not be empty");
        Self {
            description,
            is_done: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark_done(&mut self) {
        self.is_done = true;
    }

    pub fn mark_undone(&mut self) {
        self.is_done = false;
    }

    /// Whether this task falls on the given calendar date, ignoring
    /// time-of-day. Todos never do; a deadline does iff it is due that day;
    /// an event does iff the date lies within its inclusive start..end range.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match &self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { due } => due.date() == date,
            TaskKind::Event { start, end } => start.date() <= date && date <= end.date(),
        }
    }

    /// One-line human-readable form: type tag, status glyph, description,
    /// and the variant's time suffix.
    pub fn render(&self) -> String {
        let status = if self.is_done { "X" } else { " " };
        match &self.kind {
            TaskKind::Todo => format!("[T][{}] {}", status, self.description),
            TaskKind::Deadline { due } => format!(
                "[D][{}] {} (by: {} {})",
                status,
                self.description,
                format_date(due.date()),
                format_am_pm(due),
            ),
            TaskKind::Event { start, end } => format!(
                "[E][{}] {} (from: {} {} to: {} {})",
                status,
                self.description,
                format_date(start.date()),
                format_am_pm(start),
                format_date(end.date()),
                format_am_pm(end),
            ),
        }
    }
}

/// Renders a date as `MMM dd yyyy`, e.g. `Jan 15 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d %Y").to_string()
}

/// Renders a time in 12-hour lowercase am/pm form, omitting the minutes when
/// they are exactly zero: `8pm`, `8:30pm`.
pub fn format_am_pm(date_time: &NaiveDateTime) -> String {
    if date_time.minute() == 0 {
        date_time.format("%-I%P").to_string()
    } else {
        date_time.format("%-I:%M%P").to_string()
    }
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
    fn todo_renders_with_tag_and_status() {
        let mut task = Task::todo("read book");
        assert_eq!(task.render(), "[T][ ] read book");

        task.mark_done();
        assert_eq!(task.render(), "[T][X] read book");
    }

    #[test]
    fn mark_undone_restores_prior_state() {
        let mut task = Task::todo("read book");
        task.mark_done();
        task.mark_undone();
        assert!(!task.is_done());

        // Repeated marking is idempotent in final state.
        task.mark_done();
        task.mark_done();
        assert!(task.is_done());
    }

    #[test]
    fn deadline_renders_date_and_time_suffix() {
        let task = Task::deadline("return book", dt(2026, 1, 15, 20, 0));
        assert_eq!(task.render(), "[D][ ] return book (by: Jan 15 2026 8pm)");
    }

    #[test]
    fn event_renders_both_endpoints() {
        let task = Task::event(
            "project meeting",
            dt(2026, 1, 10, 9, 0),
            dt(2026, 1, 12, 18, 30),
        );
        assert_eq!(
            task.render(),
            "[E][ ] project meeting (from: Jan 10 2026 9am to: Jan 12 2026 6:30pm)"
        );
    }

    #[test]
    fn format_am_pm_omits_zero_minutes() {
        assert_eq!(format_am_pm(&dt(2026, 1, 10, 20, 0)), "8pm");
        assert_eq!(format_am_pm(&dt(2026, 1, 10, 20, 30)), "8:30pm");
        assert_eq!(format_am_pm(&dt(2026, 1, 10, 0, 0)), "12am");
        assert_eq!(format_am_pm(&dt(2026, 1, 10, 12, 5)), "12:05pm");
    }

    #[test]
    fn event_occurs_on_inclusive_date_range() {
        let task = Task::event("conference", dt(2026, 1, 10, 9, 0), dt(2026, 1, 12, 18, 0));

        assert!(task.occurs_on(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()));
        assert!(task.occurs_on(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap()));
        assert!(task.occurs_on(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
        assert!(!task.occurs_on(NaiveDate::from_ymd_opt(2026, 1, 9).unwrap()));
        assert!(!task.occurs_on(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()));
    }

    #[test]
    fn deadline_occurs_only_on_due_date() {
        let task = Task::deadline("submit report", dt(2026, 3, 1, 23, 59));
        assert!(task.occurs_on(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
        assert!(!task.occurs_on(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
    }

    #[test]
    fn todo_never_occurs_on_a_date() {
        let task = Task::todo("read book");
        assert!(!task.occurs_on(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()));
    }
}
