//! Lookup trait for fetching release metadata from an app store

#[cfg(test)]
use mockall::automock;

use crate::release::error::LookupError;
use crate::release::types::ReleaseMetadata;

/// Trait for fetching the published release of an app
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseLookup: Send + Sync {
    /// Fetches release metadata for an app
    ///
    /// # Arguments
    /// * `bundle_id` - The bundle identifier of the app (e.g., "com.example.app")
    /// * `country` - Two-letter store country code (e.g., "us")
    ///
    /// # Returns
    /// * `Ok(ReleaseMetadata)` - The first matching record
    /// * `Err(LookupError::NoResults)` - If the store knows no such app
    /// * `Err(LookupError)` - If the request could not be built, sent, or decoded
    ///
    /// Dropping the returned future cancels the lookup.
    async fn fetch_release(
        &self,
        bundle_id: &str,
        country: &str,
    ) -> Result<ReleaseMetadata, LookupError>;
}
