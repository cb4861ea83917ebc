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

//! Binds the play/pause button to playback state.

use super::EventInterest;
use tiller_core::event::{ListenerRegistry, MediaEventKind};
use tiller_core::layout::SupportKind;
use tiller_core::support::{ControlsSupport, SupportContext};
use tiller_core::variant::ControlKind;

/// Keeps the play/pause button's glyph in step with `paused()` and turns
/// presses into the playback toggle.
#[derive(Debug, Default)]
pub struct PlayPauseSupport {
    interest: EventInterest,
}

impl PlayPauseSupport {
    /// Creates the support, not yet enabled.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ControlsSupport for PlayPauseSupport {
    fn kind(&self) -> SupportKind {
        SupportKind::PlayPause
    }

    fn bound_control(&self) -> Option<ControlKind> {
        Some(ControlKind::PlayPause)
    }

    fn media_events(&self) -> &'static [MediaEventKind] {
        &[
            MediaEventKind::Play,
            MediaEventKind::Pause,
            MediaEventKind::Error,
        ]
    }

    fn enable(&mut self, ctx: &mut SupportContext<'_>) {
        self.interest
            .acquire(self.kind(), self.media_events(), ctx.registry);
        self.sync_control(ctx);
    }

    fn disable(&mut self, registry: &mut ListenerRegistry) {
        self.interest.release(registry);
    }

    fn is_enabled(&self) -> bool {
        self.interest.is_held()
    }

    fn sync_control(&mut self, ctx: &mut SupportContext<'_>) {
        let playing = !ctx.media.paused();
        if let Some(control) = ctx.variant.control_mut(ControlKind::PlayPause) {
            control.active = playing;
        }
    }

    fn control_activated(&mut self, ctx: &mut SupportContext<'_>) {
        ctx.toggle_playback();
        self.sync_control(ctx);
    }
}
