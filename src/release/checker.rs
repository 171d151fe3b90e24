//! Release availability check

use std::sync::Arc;

use crate::config::LookupConfig;
use crate::release::comparator::compare;
use crate::release::error::CheckError;
use crate::release::itunes::ItunesLookup;
use crate::release::lookup::ReleaseLookup;
use crate::release::types::ReleaseAvailable;

/// Classifies the published release of an app against the running version.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent checks.
#[derive(Clone)]
pub struct ReleaseChecker {
    lookup: Arc<dyn ReleaseLookup>,
}

impl ReleaseChecker {
    pub fn new(lookup: Arc<dyn ReleaseLookup>) -> Self {
        Self { lookup }
    }

    /// Creates a checker backed by the iTunes lookup API
    pub fn itunes(config: &LookupConfig) -> Result<Self, CheckError> {
        let lookup = ItunesLookup::new(config)?;
        Ok(Self::new(Arc::new(lookup)))
    }

    /// Check whether `country`'s store has a newer release of `bundle_id`
    /// than `current_version`.
    ///
    /// # Returns
    /// * `Ok(ReleaseAvailable)` - The published release with its comparison outcome,
    ///   including `NoNewVersion` when the running version is up to date
    /// * `Err(CheckError::NoAppInformationAvailable)` - The record has no usable version
    /// * `Err(CheckError)` - The lookup failed
    pub async fn check(
        &self,
        bundle_id: &str,
        current_version: &str,
        country: &str,
    ) -> Result<ReleaseAvailable, CheckError> {
        let metadata = self.lookup.fetch_release(bundle_id, country).await?;

        let Some(available_version) = metadata.usable_version() else {
            return Err(CheckError::NoAppInformationAvailable);
        };
        let outcome = compare(current_version, available_version);

        Ok(ReleaseAvailable { metadata, outcome })
    }
}
