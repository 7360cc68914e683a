//! Playback surface degradation
//!
//! Models the hero video element around a candidate list: one autoplay
//! attempt when candidates arrive (skipped entirely under reduced motion),
//! silent failure that leaves the poster visible, and a tap affordance to
//! toggle playback manually.

use tracing::debug;

use crate::sources::POSTER;
use crate::viewport::MotionPreference;

/// Why playback could not start. Absorbed at the point of occurrence.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("Autoplay blocked")]
    AutoplayBlocked,

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Seam over the host's media element.
pub trait Player {
    fn play(&mut self) -> Result<(), PlayError>;
    fn pause(&mut self);
    fn is_playing(&self) -> bool;
}

pub struct VideoSurface<P> {
    player: P,
    /// Read once at mount, never re-queried
    motion: MotionPreference,
    loaded: bool,
}

impl<P: Player> VideoSurface<P> {
    pub fn new(player: P, motion: MotionPreference) -> Self {
        Self {
            player,
            motion,
            loaded: false,
        }
    }

    /// Called when a candidate list is published. Attempts playback once
    /// unless reduced motion was set at mount; a refusal leaves the poster
    /// visible with no retry.
    pub fn on_candidates(&mut self) {
        if self.motion == MotionPreference::Reduce {
            debug!("Reduced motion preferred, skipping autoplay");
            return;
        }
        self.try_play();
    }

    /// Tap affordance: pause if playing, otherwise attempt playback.
    pub fn toggle(&mut self) {
        if self.player.is_playing() {
            self.player.pause();
        } else {
            self.try_play();
        }
    }

    fn try_play(&mut self) {
        if self.player.is_playing() {
            return;
        }
        if let Err(e) = self.player.play() {
            // Poster stays visible
            debug!("Playback did not start: {}", e);
        }
    }

    /// The element reported it can play the selected source.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// The element reported a source error.
    pub fn mark_error(&mut self) {
        self.loaded = false;
    }

    /// The poster stays up until a source has loaded.
    pub fn poster_visible(&self) -> bool {
        !self.loaded
    }

    pub fn poster(&self) -> &'static str {
        POSTER
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePlayer {
        playing: bool,
        play_calls: usize,
        refuse: bool,
    }

    impl FakePlayer {
        fn refusing() -> Self {
            Self {
                refuse: true,
                ..Default::default()
            }
        }
    }

    impl Player for FakePlayer {
        fn play(&mut self) -> Result<(), PlayError> {
            self.play_calls += 1;
            if self.refuse {
                return Err(PlayError::AutoplayBlocked);
            }
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    #[test]
    fn test_autoplay_on_candidates() {
        let mut surface = VideoSurface::new(FakePlayer::default(), MotionPreference::NoPreference);
        surface.on_candidates();
        assert!(surface.is_playing());
        assert_eq!(surface.player.play_calls, 1);
    }

    #[test]
    fn test_reduced_motion_skips_autoplay() {
        let mut surface = VideoSurface::new(FakePlayer::default(), MotionPreference::Reduce);
        surface.on_candidates();
        assert!(!surface.is_playing());
        assert_eq!(surface.player.play_calls, 0);
        assert!(surface.poster_visible());
    }

    #[test]
    fn test_reduced_motion_still_allows_manual_toggle() {
        let mut surface = VideoSurface::new(FakePlayer::default(), MotionPreference::Reduce);
        surface.on_candidates();
        surface.toggle();
        assert!(surface.is_playing());
        surface.toggle();
        assert!(!surface.is_playing());
    }

    #[test]
    fn test_blocked_autoplay_leaves_poster_without_retry() {
        let mut surface = VideoSurface::new(FakePlayer::refusing(), MotionPreference::NoPreference);
        surface.on_candidates();
        assert!(!surface.is_playing());
        assert!(surface.poster_visible());
        // One attempt per publication, no retry loop
        assert_eq!(surface.player.play_calls, 1);
    }

    #[test]
    fn test_candidates_do_not_restart_running_playback() {
        let mut surface = VideoSurface::new(FakePlayer::default(), MotionPreference::NoPreference);
        surface.on_candidates();
        surface.on_candidates();
        assert_eq!(surface.player.play_calls, 1);
    }

    #[test]
    fn test_poster_tracks_load_state() {
        let mut surface = VideoSurface::new(FakePlayer::default(), MotionPreference::NoPreference);
        assert!(surface.poster_visible());
        assert_eq!(surface.poster(), POSTER);

        surface.mark_loaded();
        assert!(!surface.poster_visible());

        surface.mark_error();
        assert!(surface.poster_visible());
    }
}
