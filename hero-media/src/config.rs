//! Configuration for the media selector

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Viewport width (logical pixels) below which the viewport counts as narrow
pub const NARROW_MAX_WIDTH: u32 = 600;

/// Default upper bound on a single existence probe round trip
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Selector configuration
///
/// Asset paths are fixed by convention; the only location input is the
/// origin they resolve against, since a library has no ambient page origin.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Origin the well-known asset paths are resolved against
    pub asset_base: Url,
    /// Upper bound on a single existence probe
    pub probe_timeout: Duration,
    /// Width threshold for the narrow-viewport classification
    pub narrow_max_width: u32,
}

impl MediaConfig {
    pub fn new(asset_base: &str) -> Result<Self> {
        let asset_base = Url::parse(asset_base)?;
        if asset_base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "asset base must be an absolute base URL, got {}",
                asset_base
            )));
        }
        Ok(Self {
            asset_base,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            narrow_max_width: NARROW_MAX_WIDTH,
        })
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}
