//! Version value type and its release category

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;
use crate::version::ordering::order_key;
use crate::version::parser::parse_literal;

/// Suffix marking an in-development build
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Prefix of the release candidate suffix (`-rcN`)
pub const RC_PREFIX: &str = "-rc";

/// Release category of a version
///
/// The rank is the position of the category inside one base version when
/// listed most recent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// No rc, not a snapshot (`2.1.0`)
    Stable,
    /// Released candidate (`2.1.0-rc1`)
    ReleasedCandidate,
    /// Candidate still in development (`2.1.0-rc1-SNAPSHOT`)
    SnapshotCandidate,
    /// Plain snapshot (`2.1.0-SNAPSHOT`)
    Snapshot,
}

impl Category {
    pub fn rank(&self) -> u8 {
        match self {
            Category::Stable => 0,
            Category::ReleasedCandidate => 1,
            Category::SnapshotCandidate => 2,
            Category::Snapshot => 3,
        }
    }
}

/// A project version: `MAJOR.MINOR.PATCH[-rcN][-SNAPSHOT]`
///
/// `Ord` follows recency: for the same base triple a stable release is the
/// most recent, followed by released candidates, snapshot candidates and
/// finally the plain snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub rc: Option<u32>,
    pub is_snapshot: bool,
}

impl Version {
    /// Creates a stable version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            rc: None,
            is_snapshot: false,
        }
    }

    pub fn with_rc(self, rc: u32) -> Self {
        Self {
            rc: Some(rc),
            ..self
        }
    }

    /// Same version carrying the snapshot marker
    pub fn snapshot(self) -> Self {
        Self {
            is_snapshot: true,
            ..self
        }
    }

    /// Same version without the snapshot marker, as it would be tagged
    pub fn release(self) -> Self {
        Self {
            is_snapshot: false,
            ..self
        }
    }

    pub fn base(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }

    pub fn category(&self) -> Category {
        match (self.rc, self.is_snapshot) {
            (None, false) => Category::Stable,
            (Some(_), false) => Category::ReleasedCandidate,
            (Some(_), true) => Category::SnapshotCandidate,
            (None, true) => Category::Snapshot,
        }
    }

    pub fn is_candidate(&self) -> bool {
        self.rc.is_some()
    }

    /// Neither a candidate nor a snapshot
    pub fn is_final(&self) -> bool {
        self.category() == Category::Stable
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(rc) = self.rc {
            write!(f, "{RC_PREFIX}{rc}")?;
        }
        if self.is_snapshot {
            f.write_str(SNAPSHOT_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        order_key(self).cmp(&order_key(other))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
