//! Lookup test utilities

use std::sync::Mutex;

use async_trait::async_trait;

use appstore_version::release::{LookupError, ReleaseLookup, ReleaseMetadata};

/// Lookup spy that records every call and replays a fixed result
pub struct SpyLookup {
    result: Result<ReleaseMetadata, LookupError>,
    calls: Mutex<Vec<(String, String)>>,
}

impl SpyLookup {
    pub fn returning(result: Result<ReleaseMetadata, LookupError>) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_release(version: Option<&str>, release_notes: Option<&str>, app_name: Option<&str>) -> Self {
        Self::returning(Ok(ReleaseMetadata::new(version, release_notes, app_name)))
    }

    /// `(bundle_id, country)` of every call, in order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseLookup for SpyLookup {
    async fn fetch_release(
        &self,
        bundle_id: &str,
        country: &str,
    ) -> Result<ReleaseMetadata, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((bundle_id.to_string(), country.to_string()));
        self.result.clone()
    }
}
