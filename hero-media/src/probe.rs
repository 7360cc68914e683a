//! Remote asset existence probes
//!
//! A probe is one best-effort HEAD round trip: ok status means the asset
//! exists, anything else (non-ok status, timeout, transport error) means it
//! does not. Probes are never retried and failures never propagate.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::config::MediaConfig;
use crate::error::Result;

/// Seam for asset existence checks, so selection logic can be exercised
/// without a network.
#[async_trait]
pub trait AssetProbe: Send + Sync {
    /// Check whether an asset exists at `path` relative to the asset base.
    async fn exists(&self, path: &str) -> bool;
}

/// HEAD-request prober over reqwest
#[derive(Debug, Clone)]
pub struct HttpProber {
    base: Url,
    client: reqwest::Client,
}

impl HttpProber {
    /// Build a prober with a bounded per-request timeout so a slow probe can
    /// never delay fallback resolution indefinitely.
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base, client })
    }

    pub fn from_config(config: &MediaConfig) -> Result<Self> {
        Self::new(config.asset_base.clone(), config.probe_timeout)
    }
}

#[async_trait]
impl AssetProbe for HttpProber {
    async fn exists(&self, path: &str) -> bool {
        let url = match self.base.join(path) {
            Ok(url) => url,
            Err(e) => {
                debug!("Skipping probe for bad asset path {}: {}", path, e);
                return false;
            }
        };

        match self.client.head(url.clone()).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                debug!("Probe {}: {}", url, response.status());
                ok
            }
            Err(e) => {
                // Treated the same as absent, by contract
                debug!("Probe {} failed: {}", url, e);
                false
            }
        }
    }
}
