//! svn status codes and the decorations derived from them

use std::fmt;

/// First-column status character printed by `svn status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// `' '` no modifications
    Unmodified,
    /// `A` scheduled for addition
    Added,
    /// `C` conflicted
    Conflicted,
    /// `D` scheduled for deletion
    Deleted,
    /// `I` ignored
    Ignored,
    /// `M` modified
    Modified,
    /// `R` replaced
    Replaced,
    /// `X` unversioned directory created by an externals definition
    External,
    /// `?` not under version control
    Unversioned,
    /// `!` missing (removed by a non-svn command)
    Missing,
    /// `~` obstructed by an item of a different kind
    Obstructed,
}

impl StatusCode {
    /// Every code, in the order svn documents them
    pub const ALL: [StatusCode; 11] = [
        StatusCode::Unmodified,
        StatusCode::Added,
        StatusCode::Conflicted,
        StatusCode::Deleted,
        StatusCode::Ignored,
        StatusCode::Modified,
        StatusCode::Replaced,
        StatusCode::External,
        StatusCode::Unversioned,
        StatusCode::Missing,
        StatusCode::Obstructed,
    ];

    /// Map a status character, `None` if it is outside the alphabet
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Unmodified),
            'A' => Some(Self::Added),
            'C' => Some(Self::Conflicted),
            'D' => Some(Self::Deleted),
            'I' => Some(Self::Ignored),
            'M' => Some(Self::Modified),
            'R' => Some(Self::Replaced),
            'X' => Some(Self::External),
            '?' => Some(Self::Unversioned),
            '!' => Some(Self::Missing),
            '~' => Some(Self::Obstructed),
            _ => None,
        }
    }

    /// The status character as svn prints it
    pub fn as_char(self) -> char {
        match self {
            Self::Unmodified => ' ',
            Self::Added => 'A',
            Self::Conflicted => 'C',
            Self::Deleted => 'D',
            Self::Ignored => 'I',
            Self::Modified => 'M',
            Self::Replaced => 'R',
            Self::External => 'X',
            Self::Unversioned => '?',
            Self::Missing => '!',
            Self::Obstructed => '~',
        }
    }

    pub fn is_unversioned(self) -> bool {
        self == Self::Unversioned
    }

    /// Presentation hints, a pure function of the code
    pub fn decorations(self) -> Decorations {
        let icon = match self {
            Self::Unversioned => IconCategory::Unversioned,
            Self::Added => IconCategory::Added,
            Self::Deleted => IconCategory::Deleted,
            Self::Modified => IconCategory::Modified,
            Self::Replaced => IconCategory::Renamed,
            Self::Ignored => IconCategory::Ignored,
            _ => IconCategory::None,
        };
        Decorations {
            icon,
            strikethrough: matches!(self, Self::Deleted | Self::Replaced),
            faded: self == Self::Ignored,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Icon family shown next to a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCategory {
    Unversioned,
    Added,
    Deleted,
    Modified,
    /// Renamed or replaced
    Renamed,
    Ignored,
    None,
}

/// Derived presentation attributes of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorations {
    pub icon: IconCategory,
    pub strikethrough: bool,
    pub faded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svn::constants::special::STATUS_ALPHABET;

    #[test]
    fn test_char_mapping_covers_alphabet() {
        for c in STATUS_ALPHABET {
            let code = StatusCode::from_char(c).unwrap();
            assert_eq!(code.as_char(), c);
        }
        assert_eq!(StatusCode::ALL.len(), STATUS_ALPHABET.len());
    }

    #[test]
    fn test_unknown_char_is_rejected() {
        assert_eq!(StatusCode::from_char('Z'), None);
        assert_eq!(StatusCode::from_char('m'), None);
    }

    #[test]
    fn test_decoration_table() {
        let d = StatusCode::Deleted.decorations();
        assert_eq!(d.icon, IconCategory::Deleted);
        assert!(d.strikethrough);
        assert!(!d.faded);

        let r = StatusCode::Replaced.decorations();
        assert_eq!(r.icon, IconCategory::Renamed);
        assert!(r.strikethrough);

        let i = StatusCode::Ignored.decorations();
        assert_eq!(i.icon, IconCategory::Ignored);
        assert!(i.faded);
        assert!(!i.strikethrough);

        assert_eq!(
            StatusCode::Unversioned.decorations().icon,
            IconCategory::Unversioned
        );
        assert_eq!(StatusCode::Added.decorations().icon, IconCategory::Added);
        assert_eq!(StatusCode::Modified.decorations().icon, IconCategory::Modified);
    }

    #[test]
    fn test_other_codes_have_no_decoration() {
        for code in [
            StatusCode::Unmodified,
            StatusCode::Conflicted,
            StatusCode::External,
            StatusCode::Missing,
            StatusCode::Obstructed,
        ] {
            assert_eq!(
                code.decorations(),
                Decorations {
                    icon: IconCategory::None,
                    strikethrough: false,
                    faded: false,
                }
            );
        }
    }
}
