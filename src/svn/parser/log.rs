//! Log output parser (svn log)

use crate::model::RevisionEntry;

use super::{LOG_HEADER_REGEX, LOG_SEPARATOR_REGEX, Parser};

impl Parser {
    /// Parse `svn log` output into revision entries, in output order
    ///
    /// Each entry starts after a dashed separator line:
    /// ```text
    /// ------------------------------------------------------------------------
    /// r5 | alice | 2024-01-29 15:30:00 +0900 (Mon, 29 Jan 2024) | 1 line
    ///
    /// Fix the frobnicator
    /// ```
    /// Only the first message line is kept as the comment.
    pub fn parse_log(output: &str) -> Vec<RevisionEntry> {
        let lines: Vec<&str> = output
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let mut entries = Vec::new();

        for (i, window) in lines.windows(2).enumerate() {
            if !LOG_SEPARATOR_REGEX.is_match(window[0]) {
                continue;
            }
            let Some(caps) = LOG_HEADER_REGEX.captures(window[1]) else {
                continue;
            };
            let Ok(number) = caps[1].parse::<u64>() else {
                continue;
            };

            let fields: Vec<&str> = caps[2].split('|').map(str::trim).collect();
            let author = fields.get(1).copied().unwrap_or_default();
            let date = fields.get(2).copied().unwrap_or_default();

            // Header, blank line, then the message
            let comment = match (lines.get(i + 2), lines.get(i + 3)) {
                (Some(blank), Some(message))
                    if blank.trim().is_empty() && !LOG_SEPARATOR_REGEX.is_match(message) =>
                {
                    *message
                }
                _ => "",
            };

            entries.push(RevisionEntry {
                number,
                author: author.to_string(),
                date: date.to_string(),
                comment: comment.to_string(),
            });
        }

        entries
    }
}
