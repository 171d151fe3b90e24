use std::fmt;

use serde::Serialize;

/// Which component of the version moved forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Major,
    Minor,
    Patch,
}

impl UpdateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateKind::Major => "major",
            UpdateKind::Minor => "minor",
            UpdateKind::Patch => "patch",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing the running version with the published one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "kind", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// Published version is the same as or older than the running one
    NoNewVersion,
    /// Published version is newer; carries the most significant component that changed
    NewVersion(UpdateKind),
}

impl ComparisonOutcome {
    pub fn is_new_version(&self) -> bool {
        matches!(self, ComparisonOutcome::NewVersion(_))
    }
}

/// A `major.minor.patch` triple parsed without ever failing.
///
/// Only the first three dot-separated segments are read. Each segment
/// contributes its leading ASCII digits; a segment without digits, one that
/// overflows `u64`, or a missing segment counts as 0.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.10" -> Version(1, 10, 0)
/// - "2.3.4.5" -> Version(2, 3, 4)
/// - "1.2beta.3" -> Version(1, 2, 3)
/// - "v1.2" -> Version(0, 2, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn parse(version: &str) -> Self {
        let mut components = version.split('.').take(3).map(parse_component);

        Self {
            major: components.next().unwrap_or(0),
            minor: components.next().unwrap_or(0),
            patch: components.next().unwrap_or(0),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn parse_component(segment: &str) -> u64 {
    let digits_end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());

    segment[..digits_end].parse().unwrap_or(0)
}

/// Compare the running version with the published one.
///
/// Components are compared most significant first; the first difference
/// decides. A lower published component means there is nothing newer, even
/// if a later component is higher.
pub fn compare(current: &str, available: &str) -> ComparisonOutcome {
    let current = Version::parse(current);
    let available = Version::parse(available);

    if available.major != current.major {
        return if available.major > current.major {
            ComparisonOutcome::NewVersion(UpdateKind::Major)
        } else {
            ComparisonOutcome::NoNewVersion
        };
    }

    if available.minor != current.minor {
        return if available.minor > current.minor {
            ComparisonOutcome::NewVersion(UpdateKind::Minor)
        } else {
            ComparisonOutcome::NoNewVersion
        };
    }

    if available.patch > current.patch {
        ComparisonOutcome::NewVersion(UpdateKind::Patch)
    } else {
        ComparisonOutcome::NoNewVersion
    }
}

pub fn is_new_version_available(current: &str, available: &str) -> bool {
    compare(current, available) != ComparisonOutcome::NoNewVersion
}
