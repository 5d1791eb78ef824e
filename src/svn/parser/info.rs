//! Info output parser (svn info)

use crate::model::WorkingCopyInfo;

use super::Parser;

impl Parser {
    /// Parse `svn info` output into `Key: value` pairs
    pub fn parse_info(output: &str) -> WorkingCopyInfo {
        let entries = output
            .lines()
            .filter_map(|line| line.trim_end().split_once(": "))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        WorkingCopyInfo {
            raw: output.to_string(),
            entries,
        }
    }
}
