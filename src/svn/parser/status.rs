//! Status output parser (svn status) and changelist reconciler

use std::path::Path;

use tracing::{debug, warn};

use crate::model::{
    Group, GroupId, ParseAnomaly, Reconciliation, Resource, ResourceOrder, StatusCode,
};

use super::{CHANGELIST_HEADER_REGEX, LOOSE_ENTRY_REGEX, Parser};

/// Width of svn's status column block (item status + six flag columns)
const STATUS_COLUMNS: usize = 7;

/// Allowed characters for each flag column after the item status
/// (properties, lock, history, switched, lock token, tree conflict)
const FLAG_COLUMNS: [&str; STATUS_COLUMNS - 1] = [" CM", " L", " +", " SX", " KOTB", " C"];

/// One classified line of `svn status` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine<'a> {
    /// `--- Changelist '<name>':`
    Header(&'a str),
    /// A file entry
    Entry { code: StatusCode, path: &'a str },
}

impl Parser {
    /// Classify a single `svn status` line
    ///
    /// Formats:
    /// - `--- Changelist 'name':` (changelist header)
    /// - `M       path` (svn's fixed seven-column layout)
    /// - `? path` (status character, whitespace, path)
    ///
    /// Anything else, including blank lines, yields `None`.
    pub fn parse_status_line(line: &str) -> Option<StatusLine<'_>> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(caps) = CHANGELIST_HEADER_REGEX.captures(line) {
            let name = caps.get(1)?.as_str();
            return Some(StatusLine::Header(name));
        }

        let code = StatusCode::from_char(line.chars().next()?)?;

        if let Some(path) = Self::fixed_width_path(line) {
            return Some(StatusLine::Entry { code, path });
        }

        // An empty status column only occurs in the fixed layout
        if code == StatusCode::Unmodified {
            return None;
        }

        let caps = LOOSE_ENTRY_REGEX.captures(line)?;
        Some(StatusLine::Entry {
            code,
            path: caps.get(1)?.as_str(),
        })
    }

    /// Path of a line in the `XXXXXXX path` layout, kept verbatim
    fn fixed_width_path(line: &str) -> Option<&str> {
        let flags = line.get(1..STATUS_COLUMNS)?;
        let valid = flags
            .chars()
            .zip(FLAG_COLUMNS)
            .all(|(c, allowed)| allowed.contains(c));
        if !valid || flags.chars().count() != FLAG_COLUMNS.len() {
            return None;
        }
        if line.get(STATUS_COLUMNS..STATUS_COLUMNS + 1)? != " " {
            return None;
        }
        let path = line.get(STATUS_COLUMNS + 1..)?;
        match path.chars().next() {
            Some(c) if c != '>' && !c.is_whitespace() => Some(path),
            _ => None,
        }
    }

    /// Rebuild the grouped view from one complete `svn status` output
    ///
    /// Pure function of its input. Entries with status `?` always land in
    /// the unversioned group, whatever changelist header precedes them.
    pub fn reconcile(output: &str, root: &Path, order: ResourceOrder) -> Reconciliation {
        let mut default = Group::new(GroupId::Default);
        let mut pending: Vec<Group> = Vec::new();
        let mut unversioned = Group::new(GroupId::Unversioned);
        let mut anomalies = Vec::new();
        // Index into `pending` of the most recent header (None = default)
        let mut current: Option<usize> = None;

        for (index, line) in output.lines().enumerate() {
            match Self::parse_status_line(line) {
                Some(StatusLine::Header(name)) => {
                    let existing = pending
                        .iter()
                        .position(|g| g.id.changelist() == Some(name));
                    current = Some(match existing {
                        Some(i) => {
                            warn!(changelist = %name, "duplicate changelist header");
                            anomalies.push(ParseAnomaly::DuplicateChangelist {
                                name: name.to_string(),
                            });
                            i
                        }
                        None => {
                            pending.push(Group::new(GroupId::pending(name)));
                            pending.len() - 1
                        }
                    });
                }
                Some(StatusLine::Entry { code, path }) => {
                    let resource = Resource::new(root, path, code);
                    let group = if code.is_unversioned() {
                        &mut unversioned
                    } else {
                        match current.and_then(|i| pending.get_mut(i)) {
                            Some(group) => group,
                            None => &mut default,
                        }
                    };
                    group.insert(resource, order);
                }
                None if line.trim().is_empty() => {}
                None => {
                    debug!(line_number = index + 1, line = %line, "skipping status line");
                    anomalies.push(ParseAnomaly::UnrecognizedLine {
                        line_number: index + 1,
                        text: line.to_string(),
                    });
                }
            }
        }

        let result = Reconciliation::new(default, pending, unversioned).with_anomalies(anomalies);
        debug!(
            groups = result.groups().count(),
            resources = result.resource_count(),
            anomalies = result.anomalies().len(),
            "reconciled status output"
        );
        result
    }
}
