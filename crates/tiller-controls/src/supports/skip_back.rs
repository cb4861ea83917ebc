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

//! Binds the skip-back button to the seekable window.

use super::EventInterest;
use tiller_core::event::{ListenerRegistry, MediaEventKind};
use tiller_core::layout::SupportKind;
use tiller_core::support::{ControlsSupport, SupportContext};
use tiller_core::variant::ControlKind;

/// Rewinds the playhead by the classification's skip duration, clamped to
/// the earliest seekable position.
///
/// The button is disabled for streams whose duration exceeds the non-live
/// ceiling: skipping inside an effectively unbounded live stream is
/// meaningless, and the ceiling is how those are told apart from very long
/// recordings.
#[derive(Debug, Default)]
pub struct SkipBackSupport {
    interest: EventInterest,
}

impl SkipBackSupport {
    /// Creates the support, not yet enabled.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ControlsSupport for SkipBackSupport {
    fn kind(&self) -> SupportKind {
        SupportKind::SkipBack
    }

    fn bound_control(&self) -> Option<ControlKind> {
        Some(ControlKind::SkipBack)
    }

    fn media_events(&self) -> &'static [MediaEventKind] {
        &[MediaEventKind::DurationChange]
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
        let seeking_supported = ctx.host.map_or(true, |host| host.supports_seeking());
        let enabled =
            seeking_supported && ctx.media.duration() <= ctx.config.non_live_duration_ceiling;
        if let Some(control) = ctx.variant.control_mut(ControlKind::SkipBack) {
            control.enabled = enabled;
        }
    }

    fn control_activated(&mut self, ctx: &mut SupportContext<'_>) {
        let skip = ctx.layout_traits().skip_duration();
        let floor = ctx.media.seekable().first_start().unwrap_or(0.0);
        let target = (ctx.media.current_time() - skip).max(floor);
        ctx.media.set_current_time(target);
    }
}
