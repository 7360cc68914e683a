//! Adaptive media selection
//!
//! Maps the current viewport to an ordered candidate list, re-resolving on
//! every viewport change. Narrow portrait viewports get up to two sequential
//! existence probes for a vertical variant, short-circuiting on the first
//! hit; every other bucket resolves without touching the network.
//!
//! The selector runs as a spawned task owning its channels; dropping the
//! returned handle closes the shutdown channel and cancels the task, so a
//! probe still in flight at teardown can never publish its result.

use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::config::MediaConfig;
use crate::probe::AssetProbe;
use crate::sources::{self, MediaCandidate};
use crate::viewport::{classify, Viewport, ViewportClass, ViewportReceiver};

/// Published selection state. `Unresolved` until the first pass completes;
/// the surface shows the poster until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Unresolved,
    Resolved(Vec<MediaCandidate>),
}

impl Resolution {
    pub fn candidates(&self) -> Option<&[MediaCandidate]> {
        match self {
            Resolution::Unresolved => None,
            Resolution::Resolved(candidates) => Some(candidates),
        }
    }
}

/// Handle to a mounted selector. Dropping it tears the selector down.
pub struct SelectorHandle {
    resolution_rx: watch::Receiver<Resolution>,
    // Dropping the sender closes the channel the task selects on.
    _shutdown_tx: mpsc::Sender<()>,
}

impl SelectorHandle {
    /// Latest published state.
    pub fn current(&self) -> Resolution {
        self.resolution_rx.borrow().clone()
    }

    /// Subscribe to future publications.
    pub fn subscribe(&self) -> watch::Receiver<Resolution> {
        self.resolution_rx.clone()
    }

    /// Wait for the in-progress pass to publish and return its candidates.
    pub async fn resolved(&mut self) -> Vec<MediaCandidate> {
        let result = self
            .resolution_rx
            .wait_for(|r| matches!(r, Resolution::Resolved(_)))
            .await;
        match result {
            Ok(resolution) => resolution
                .candidates()
                .map(|c| c.to_vec())
                .unwrap_or_default(),
            // Task gone; nothing will ever resolve
            Err(_) => Vec::new(),
        }
    }
}

pub struct MediaSelector<P> {
    narrow_max_width: u32,
    prober: P,
    viewport_rx: ViewportReceiver,
    resolution_tx: watch::Sender<Resolution>,
    shutdown_rx: mpsc::Receiver<()>,
}

impl<P: AssetProbe + 'static> MediaSelector<P> {
    /// Mount the selector: resolve once immediately, then again on every
    /// viewport change, until the returned handle is dropped.
    pub fn mount(
        config: &MediaConfig,
        viewport_rx: ViewportReceiver,
        prober: P,
    ) -> SelectorHandle {
        let (resolution_tx, resolution_rx) = watch::channel(Resolution::Unresolved);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let mut selector = Self {
            narrow_max_width: config.narrow_max_width,
            prober,
            viewport_rx,
            resolution_tx,
            shutdown_rx,
        };

        tokio::spawn(async move {
            selector.run().await;
        });

        SelectorHandle {
            resolution_rx,
            _shutdown_tx: shutdown_tx,
        }
    }

    async fn run(&mut self) {
        loop {
            let viewport = *self.viewport_rx.borrow_and_update();

            // Shutdown wins over a completing probe: once the handle is
            // gone, an in-flight pass is dropped, not published.
            let candidates = tokio::select! {
                biased;
                _ = self.shutdown_rx.recv() => break,
                candidates = Self::resolve(&self.prober, viewport, self.narrow_max_width) => candidates,
            };
            debug!("Resolved {} candidate(s) for {:?}", candidates.len(), viewport);
            let _ = self.resolution_tx.send(Resolution::Resolved(candidates));

            // Wait for the next viewport change.
            tokio::select! {
                biased;
                _ = self.shutdown_rx.recv() => break,
                changed = self.viewport_rx.changed() => {
                    // Signal source dropped: no more changes will arrive
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }
        debug!("Media selector torn down");
    }

    async fn resolve(
        prober: &P,
        viewport: Viewport,
        narrow_max_width: u32,
    ) -> Vec<MediaCandidate> {
        match classify(viewport, narrow_max_width) {
            ViewportClass::NarrowPortrait => {
                // Prefer a vertical variant when one is hosted. Probes are
                // sequential and stop at the first hit, so the webm probe is
                // only issued when the mp4 is absent.
                if prober.exists(sources::VERTICAL_MP4).await {
                    return vec![MediaCandidate::mp4(sources::VERTICAL_MP4)];
                }
                if prober.exists(sources::VERTICAL_WEBM).await {
                    return vec![MediaCandidate::webm(sources::VERTICAL_WEBM)];
                }
                sources::mobile_pair()
            }
            ViewportClass::Narrow => sources::mobile_pair(),
            ViewportClass::Wide => sources::desktop_triple(),
        }
    }
}
