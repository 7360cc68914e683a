//! Adaptive media selection for a landing-page hero surface.
//!
//! Maps viewport state to an ordered list of video source candidates,
//! probing for optional vertical variants over HTTP and re-resolving
//! whenever the viewport changes. Every failure degrades to the poster
//! image; nothing propagates and nothing retries.

pub mod config;
pub mod error;
pub mod probe;
pub mod selector;
pub mod sources;
pub mod surface;
pub mod viewport;

pub use config::MediaConfig;
pub use error::{Error, Result};
pub use probe::{AssetProbe, HttpProber};
pub use selector::{MediaSelector, Resolution, SelectorHandle};
pub use sources::MediaCandidate;
pub use surface::{PlayError, Player, VideoSurface};
pub use viewport::{
    viewport_signal, MotionPreference, Orientation, Viewport, ViewportClass,
};
