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

//! Binds the fullscreen button to the presentation channel.

use super::EventInterest;
use tiller_core::event::{ListenerRegistry, MediaEventKind};
use tiller_core::layout::SupportKind;
use tiller_core::support::{ControlsSupport, SupportContext};
use tiller_core::variant::ControlKind;

/// Enables the fullscreen button for visual media and drives enter/exit
/// over whichever fullscreen channel the coordinator adopted at binding
/// time.
#[derive(Debug, Default)]
pub struct FullscreenSupport {
    interest: EventInterest,
}

impl FullscreenSupport {
    /// Creates the support, not yet enabled.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ControlsSupport for FullscreenSupport {
    fn kind(&self) -> SupportKind {
        SupportKind::Fullscreen
    }

    fn bound_control(&self) -> Option<ControlKind> {
        Some(ControlKind::Fullscreen)
    }

    fn media_events(&self) -> &'static [MediaEventKind] {
        &[MediaEventKind::LoadedMetadata, MediaEventKind::Error]
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
        let has_video = ctx.media.is_video() || ctx.media.video_track_count() > 0;
        if let Some(control) = ctx.variant.control_mut(ControlKind::Fullscreen) {
            control.enabled = has_video;
        }
    }

    fn control_activated(&mut self, ctx: &mut SupportContext<'_>) {
        if ctx.is_fullscreen() {
            ctx.exit_fullscreen();
        } else {
            ctx.enter_fullscreen();
        }
    }
}
