//! Resource groups (changelists)

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::resource::Resource;

const DEFAULT_ID: &str = "default";
const UNVERSIONED_ID: &str = "unversioned";
const PENDING_PREFIX: &str = "pending:";

/// Stable key of a group across refreshes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupId {
    /// Versioned changes outside any changelist
    Default,
    /// A named svn changelist
    Pending(String),
    /// Files not under version control
    Unversioned,
}

impl GroupId {
    pub fn pending(name: impl Into<String>) -> Self {
        Self::Pending(name.into())
    }

    /// Changelist name, if this is a pending group
    pub fn changelist(&self) -> Option<&str> {
        match self {
            Self::Pending(name) => Some(name),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn label(&self) -> String {
        match self {
            Self::Default => DEFAULT_ID.to_string(),
            Self::Pending(name) => name.clone(),
            Self::Unversioned => UNVERSIONED_ID.to_string(),
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str(DEFAULT_ID),
            Self::Pending(name) => write!(f, "{}{}", PENDING_PREFIX, name),
            Self::Unversioned => f.write_str(UNVERSIONED_ID),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown group id: {0}")]
pub struct ParseGroupIdError(pub String);

impl FromStr for GroupId {
    type Err = ParseGroupIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DEFAULT_ID => Ok(Self::Default),
            UNVERSIONED_ID => Ok(Self::Unversioned),
            _ => match s.strip_prefix(PENDING_PREFIX) {
                Some(name) if !name.is_empty() => Ok(Self::Pending(name.to_string())),
                _ => Err(ParseGroupIdError(s.to_string())),
            },
        }
    }
}

/// Order of resources within a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceOrder {
    /// Order of appearance in `svn status` output
    #[default]
    Scan,
    /// Each new entry goes in front of the previous ones
    MostRecentFirst,
}

/// A named, ordered bucket of resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub label: String,
    pub resources: Vec<Resource>,
}

impl Group {
    pub fn new(id: GroupId) -> Self {
        Self {
            label: id.label(),
            id,
            resources: Vec::new(),
        }
    }

    /// Insert a resource according to `order`
    pub fn insert(&mut self, resource: Resource, order: ResourceOrder) {
        match order {
            ResourceOrder::Scan => self.resources.push(resource),
            ResourceOrder::MostRecentFirst => self.resources.insert(0, resource),
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
