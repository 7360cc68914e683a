//! Well-known asset paths and candidate list construction
//!
//! Paths are convention-based and not configurable. Candidate lists are
//! ordered most-preferred first; the desktop list always carries the
//! universal fallback in trailing position.

use serde::{Deserialize, Serialize};

pub const VERTICAL_MP4: &str = "/videos/hero-background-mobile-vertical.mp4";
pub const VERTICAL_WEBM: &str = "/videos/hero-background-mobile-vertical.webm";
pub const MOBILE_WEBM: &str = "/videos/hero-background-mobile.webm";
pub const MOBILE_MP4: &str = "/videos/hero-background-mobile.mp4";
pub const DESKTOP_WEBM: &str = "/videos/hero-background-desktop.webm";
pub const DESKTOP_MP4: &str = "/videos/hero-background-desktop.mp4";

/// Universal fallback, playable on anything that reaches the desktop branch
pub const FALLBACK_MP4: &str = "/videos/Dec_31__1410_16s_202512311424_nv6f2.mp4";

/// Placeholder shown before resolution and whenever playback is not running
pub const POSTER: &str = "/images/hero-poster.svg";

pub const MIME_MP4: &str = "video/mp4";
pub const MIME_WEBM: &str = "video/webm";

/// One playable source option for the video surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCandidate {
    pub uri: String,
    pub mime_type: String,
}

impl MediaCandidate {
    pub fn mp4(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            mime_type: MIME_MP4.to_string(),
        }
    }

    pub fn webm(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            mime_type: MIME_WEBM.to_string(),
        }
    }
}

/// Narrow viewports without a vertical variant: webm first, then mp4
pub fn mobile_pair() -> Vec<MediaCandidate> {
    vec![
        MediaCandidate::webm(MOBILE_WEBM),
        MediaCandidate::mp4(MOBILE_MP4),
    ]
}

/// Everything else: webm, mp4, then the universal fallback
pub fn desktop_triple() -> Vec<MediaCandidate> {
    vec![
        MediaCandidate::webm(DESKTOP_WEBM),
        MediaCandidate::mp4(DESKTOP_MP4),
        MediaCandidate::mp4(FALLBACK_MP4),
    ]
}
