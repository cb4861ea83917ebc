// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The media-stats overlay and its cooperative sampler.
//!
//! The overlay is a panel of preformatted display rows the embedder
//! renders verbatim. Sampling runs once per animation tick through
//! [`StatsPoller::poll`], which the embedder calls from its frame loop; the
//! poller holds the panel weakly and reports `false` the first time it
//! finds the panel gone, which is the loop's sole termination signal. No
//! timers, no queues, no cancel token.

use crate::controller::MediaController;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tiller_core::surface::ElementHandle;

/// One sampling pass worth of display rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Source descriptor label supplied by the host.
    pub source: String,
    /// Controls extent, suffixed with the device pixel ratio when it is
    /// not 1.
    pub viewport: String,
    /// Dropped-of-total frame counters.
    pub frames: String,
    /// Selected video track's coded size and frame rate.
    pub resolution: String,
    /// Selected video track's codec string.
    pub codecs: String,
    /// Color primaries, transfer, and matrix labels.
    pub color: String,
}

/// The live overlay: an element mounted on the surface plus the latest
/// snapshot.
#[derive(Debug)]
pub struct StatsPanel {
    element: ElementHandle,
    snapshot: StatsSnapshot,
}

impl StatsPanel {
    /// Allocates a panel with a fresh element and an empty snapshot.
    pub fn new() -> Self {
        Self {
            element: ElementHandle::allocate(),
            snapshot: StatsSnapshot::default(),
        }
    }

    /// The panel's element identity.
    #[inline]
    pub fn element(&self) -> ElementHandle {
        self.element
    }

    /// The most recent snapshot.
    #[inline]
    pub fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    pub(crate) fn set_snapshot(&mut self, snapshot: StatsSnapshot) {
        self.snapshot = snapshot;
    }
}

/// Cooperative per-frame sampler for a live [`StatsPanel`].
///
/// Handed to the embedder by [`MediaController::stats_poller`]. The panel
/// is observed weakly; tearing the overlay down is the only cancellation
/// mechanism.
#[derive(Debug)]
pub struct StatsPoller {
    panel: Weak<RefCell<StatsPanel>>,
}

impl StatsPoller {
    pub(crate) fn new(panel: Weak<RefCell<StatsPanel>>) -> Self {
        Self { panel }
    }

    /// Runs one sampling pass.
    ///
    /// Returns `true` while the overlay lives and another pass should be
    /// scheduled; `false` once the panel has been torn down, at which
    /// point the embedder's loop stops rescheduling.
    pub fn poll(&self, controller: &mut MediaController) -> bool {
        let Some(panel) = self.panel.upgrade() else {
            log::trace!("Stats overlay is gone; sampler stops.");
            return false;
        };
        // Geometry feeds the viewport row, so refresh it before sampling.
        controller.update_controls_size();
        controller.store_stats_snapshot(&panel);
        true
    }
}
