//! Release metadata and check results

use serde::{Deserialize, Serialize};

use crate::release::comparator::ComparisonOutcome;

/// Release information published for an app.
///
/// The store may omit any of these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseMetadata {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub release_notes: Option<String>,
    #[serde(default, rename(deserialize = "trackName", serialize = "appName"))]
    pub app_name: Option<String>,
}

impl ReleaseMetadata {
    pub fn new(version: Option<&str>, release_notes: Option<&str>, app_name: Option<&str>) -> Self {
        Self {
            version: version.map(str::to_string),
            release_notes: release_notes.map(str::to_string),
            app_name: app_name.map(str::to_string),
        }
    }

    /// The published version, if present and not blank
    pub fn usable_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Successful check: the published release and how it compares to the running version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseAvailable {
    pub metadata: ReleaseMetadata,
    pub outcome: ComparisonOutcome,
}

impl ReleaseAvailable {
    pub fn is_new_version(&self) -> bool {
        self.outcome.is_new_version()
    }
}
