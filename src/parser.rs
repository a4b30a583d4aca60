//! Pure parsing primitives over a raw input line. Nothing here touches
//! application state; the session layer combines these into per-command
//! splitting rules.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Result, TasklineError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

/// First whitespace-delimited token of the line, lowercased. Callers reject
/// empty input before asking for a command word.
pub fn command_word(line: &str) -> String {
    line.split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Everything after the first token, trimmed; empty if there is nothing.
pub fn remainder(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.find(char::is_whitespace) {
        Some(pos) => trimmed[pos..].trim_start(),
        None => "",
    }
}

/// Parses the remainder as a 1-based task number and converts it to a
/// 0-based index. Missing, non-numeric, or zero input fails with the
/// caller-supplied message; range checking against the list happens at the
/// point of use.
pub fn parse_index(line: &str, invalid_message: &str) -> Result<usize> {
    remainder(line)
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| TasklineError::InvalidTaskNumber(invalid_message.to_string()))
}

/// Strict `yyyy-MM-dd` parse. Leading/trailing whitespace is tolerated,
/// nothing else.
pub fn parse_date(text: &str, bad_message: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| TasklineError::InvalidDate(bad_message.to_string()))
}

/// Strict `yyyy-MM-dd HHmm` parse (24-hour, no separator between hour and
/// minute). Leading/trailing whitespace is tolerated, nothing else.
pub fn parse_date_time(text: &str, bad_message: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_FORMAT)
        .map_err(|_| TasklineError::InvalidDateTime(bad_message.to_string()))
}
