//! iTunes lookup API implementation

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::LookupConfig;
use crate::release::error::LookupError;
use crate::release::lookup::ReleaseLookup;
use crate::release::types::ReleaseMetadata;

/// Response from the iTunes lookup API
#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<ReleaseMetadata>,
}

/// Lookup implementation for the iTunes lookup API
pub struct ItunesLookup {
    client: Client,
    base_url: String,
}

impl ItunesLookup {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| LookupError::Other(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates a lookup against a custom base URL with default settings
    pub fn with_base_url(base_url: &str) -> Result<Self, LookupError> {
        Self::new(&LookupConfig {
            base_url: base_url.to_string(),
            ..LookupConfig::default()
        })
    }
}

/// Build the lookup URL for an app.
///
/// `time` is appended as the `t` parameter so no cache along the way serves
/// a stale answer.
pub fn lookup_url(
    base_url: &str,
    country: &str,
    bundle_id: &str,
    time: f64,
) -> Result<Url, LookupError> {
    if bundle_id.trim().is_empty() {
        return Err(LookupError::InvalidRequest(
            "bundle identifier is empty".to_string(),
        ));
    }

    if country.is_empty() || !country.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(LookupError::InvalidRequest(format!(
            "invalid country code: {country:?}"
        )));
    }

    let mut url = Url::parse(&format!(
        "{}/{}/lookup",
        base_url.trim_end_matches('/'),
        country
    ))
    .map_err(|e| LookupError::InvalidRequest(format!("{base_url}: {e}")))?;

    url.query_pairs_mut()
        .append_pair("bundleId", bundle_id)
        .append_pair("t", &time.to_string());

    Ok(url)
}

/// Current wall-clock time in fractional seconds
fn cache_buster() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

#[async_trait::async_trait]
impl ReleaseLookup for ItunesLookup {
    async fn fetch_release(
        &self,
        bundle_id: &str,
        country: &str,
    ) -> Result<ReleaseMetadata, LookupError> {
        let url = lookup_url(&self.base_url, country, bundle_id, cache_buster())?;
        debug!("Fetching App Store release: {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("iTunes lookup returned status {}: {}", status, url);
            return Err(LookupError::Network(format!(
                "bad server response: {status}"
            )));
        }

        let body = response.bytes().await?;
        let lookup: LookupResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse iTunes lookup response: {}", e);
            LookupError::Decode(e.to_string())
        })?;

        debug!(
            "Found {} results for bundle {}",
            lookup.results.len(),
            bundle_id
        );

        lookup
            .results
            .into_iter()
            .next()
            .ok_or(LookupError::NoResults)
    }
}
