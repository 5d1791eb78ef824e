//! Revision history and working copy info

/// One entry of `svn log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionEntry {
    pub number: u64,
    pub author: String,
    pub date: String,
    /// First line of the log message
    pub comment: String,
}

impl RevisionEntry {
    /// Picker label, e.g. `#5 fix typo`
    pub fn label(&self) -> String {
        format!("#{} {}", self.number, self.comment)
    }
}

/// Parsed `svn info` output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingCopyInfo {
    /// Output as printed by svn
    pub raw: String,
    /// `Key: value` pairs in output order
    pub entries: Vec<(String, String)>,
}

impl WorkingCopyInfo {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Last path segment of the repository root URL
    pub fn repository_name(&self) -> Option<&str> {
        let root = self.get(crate::svn::constants::special::REPOSITORY_ROOT)?;
        root.trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
    }
}
