//! Viewport classification and environment signals
//!
//! The host environment publishes `Viewport` values on a watch channel; the
//! selector subscribes at mount and drops the subscription at teardown. One
//! channel stands in for the two media queries of the original surface
//! (max-width and orientation), which always fed a single recomputation.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Snapshot of the viewport state the selector classifies against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in logical pixels
    pub width: u32,
    pub orientation: Orientation,
}

impl Viewport {
    pub fn new(width: u32, orientation: Orientation) -> Self {
        Self { width, orientation }
    }
}

/// The user/OS reduced-motion accessibility preference, read once at mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

/// Classification buckets, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Narrow and portrait: a vertical variant is worth probing for
    NarrowPortrait,
    /// Narrow, landscape
    Narrow,
    /// Everything else
    Wide,
}

/// Map a viewport snapshot to exactly one bucket.
pub fn classify(viewport: Viewport, narrow_max_width: u32) -> ViewportClass {
    if viewport.width < narrow_max_width {
        match viewport.orientation {
            Orientation::Portrait => ViewportClass::NarrowPortrait,
            Orientation::Landscape => ViewportClass::Narrow,
        }
    } else {
        ViewportClass::Wide
    }
}

pub type ViewportSender = watch::Sender<Viewport>;
pub type ViewportReceiver = watch::Receiver<Viewport>;

/// Create the viewport signal. The host keeps the sender and publishes on
/// every width/orientation change; subscribers see the latest value only.
pub fn viewport_signal(initial: Viewport) -> (ViewportSender, ViewportReceiver) {
    watch::channel(initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NARROW_MAX_WIDTH;

    #[test]
    fn test_classify_narrow_portrait() {
        let viewport = Viewport::new(375, Orientation::Portrait);
        assert_eq!(
            classify(viewport, NARROW_MAX_WIDTH),
            ViewportClass::NarrowPortrait
        );
    }

    #[test]
    fn test_classify_narrow_landscape() {
        let viewport = Viewport::new(480, Orientation::Landscape);
        assert_eq!(classify(viewport, NARROW_MAX_WIDTH), ViewportClass::Narrow);
    }

    #[test]
    fn test_classify_wide() {
        let viewport = Viewport::new(1200, Orientation::Landscape);
        assert_eq!(classify(viewport, NARROW_MAX_WIDTH), ViewportClass::Wide);

        // Portrait does not matter once the viewport is wide
        let viewport = Viewport::new(800, Orientation::Portrait);
        assert_eq!(classify(viewport, NARROW_MAX_WIDTH), ViewportClass::Wide);
    }

    #[test]
    fn test_classify_threshold_boundary() {
        // Exactly at the threshold counts as wide
        let at = Viewport::new(NARROW_MAX_WIDTH, Orientation::Portrait);
        assert_eq!(classify(at, NARROW_MAX_WIDTH), ViewportClass::Wide);

        let below = Viewport::new(NARROW_MAX_WIDTH - 1, Orientation::Portrait);
        assert_eq!(
            classify(below, NARROW_MAX_WIDTH),
            ViewportClass::NarrowPortrait
        );
    }
}
