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

//! Binds the mute button to the muted flag.

use super::EventInterest;
use tiller_core::event::{ListenerRegistry, MediaEventKind};
use tiller_core::layout::SupportKind;
use tiller_core::support::{ControlsSupport, SupportContext};
use tiller_core::variant::ControlKind;

/// Reflects the muted flag into the mute button and toggles it on press.
#[derive(Debug, Default)]
pub struct MuteSupport {
    interest: EventInterest,
}

impl MuteSupport {
    /// Creates the support, not yet enabled.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ControlsSupport for MuteSupport {
    fn kind(&self) -> SupportKind {
        SupportKind::Mute
    }

    fn bound_control(&self) -> Option<ControlKind> {
        Some(ControlKind::Mute)
    }

    fn media_events(&self) -> &'static [MediaEventKind] {
        &[MediaEventKind::VolumeChange]
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
        let muted = ctx.media.muted();
        if let Some(control) = ctx.variant.control_mut(ControlKind::Mute) {
            control.active = muted;
        }
    }

    fn control_activated(&mut self, ctx: &mut SupportContext<'_>) {
        ctx.media.set_muted(!ctx.media.muted());
        self.sync_control(ctx);
    }
}
