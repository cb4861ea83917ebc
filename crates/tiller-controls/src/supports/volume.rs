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

//! Binds the volume slider to volume and muted state.

use super::EventInterest;
use tiller_core::event::{ListenerRegistry, MediaEventKind};
use tiller_core::layout::SupportKind;
use tiller_core::support::{ControlsSupport, SupportContext};
use tiller_core::variant::ControlKind;

/// Keeps the volume slider at the effective output level: the media's
/// volume, or zero while muted. Dragging the slider to a nonzero value
/// while muted unmutes, matching what a user dragging a silent slider
/// expects.
#[derive(Debug, Default)]
pub struct VolumeSupport {
    interest: EventInterest,
}

impl VolumeSupport {
    /// Creates the support, not yet enabled.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ControlsSupport for VolumeSupport {
    fn kind(&self) -> SupportKind {
        SupportKind::Volume
    }

    fn bound_control(&self) -> Option<ControlKind> {
        Some(ControlKind::VolumeSlider)
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
        let level = if ctx.media.muted() {
            0.0
        } else {
            ctx.media.volume()
        };
        if let Some(control) = ctx.variant.control_mut(ControlKind::VolumeSlider) {
            control.value = level;
        }
    }

    fn control_value_changed(&mut self, value: f64, ctx: &mut SupportContext<'_>) {
        ctx.media.set_volume(value);
        if value > 0.0 && ctx.media.muted() {
            ctx.media.set_muted(false);
        }
        self.sync_control(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubMedia;
    use tiller_core::config::ControlsConfig;
    use tiller_core::layout::VariantKind;
    use tiller_core::media::FullscreenChannel;
    use tiller_core::variant::ControlsVariant;

    fn ctx<'a>(
        media: &'a StubMedia,
        variant: &'a mut ControlsVariant,
        registry: &'a mut ListenerRegistry,
        config: &'a ControlsConfig,
    ) -> SupportContext<'a> {
        SupportContext {
            media,
            variant,
            host: None,
            registry,
            config,
            has_played: true,
            fullscreen_channel: FullscreenChannel::PresentationMode,
        }
    }

    fn slider_value(variant: &ControlsVariant) -> f64 {
        variant.control(ControlKind::VolumeSlider).unwrap().value
    }

    #[test]
    fn test_sync_shows_volume_or_zero_while_muted() {
        let media = StubMedia::default();
        media.volume.set(0.6);
        let config = ControlsConfig::default();
        let mut variant = ControlsVariant::new(VariantKind::InlineBar, &config);
        let mut registry = ListenerRegistry::new();
        let mut support = VolumeSupport::new();

        support.sync_control(&mut ctx(&media, &mut variant, &mut registry, &config));
        assert_eq!(slider_value(&variant), 0.6);

        media.muted.set(true);
        support.sync_control(&mut ctx(&media, &mut variant, &mut registry, &config));
        assert_eq!(slider_value(&variant), 0.0);
    }

    #[test]
    fn test_nonzero_value_while_muted_unmutes() {
        let media = StubMedia::default();
        media.muted.set(true);
        let config = ControlsConfig::default();
        let mut variant = ControlsVariant::new(VariantKind::InlineBar, &config);
        let mut registry = ListenerRegistry::new();
        let mut support = VolumeSupport::new();

        support.control_value_changed(0.4, &mut ctx(&media, &mut variant, &mut registry, &config));
        assert!(!media.muted.get());
        assert_eq!(media.volume.get(), 0.4);
        assert_eq!(slider_value(&variant), 0.4);
    }

    #[test]
    fn test_zero_value_leaves_muted_state_alone() {
        let media = StubMedia::default();
        media.muted.set(true);
        let config = ControlsConfig::default();
        let mut variant = ControlsVariant::new(VariantKind::InlineBar, &config);
        let mut registry = ListenerRegistry::new();
        let mut support = VolumeSupport::new();

        support.control_value_changed(0.0, &mut ctx(&media, &mut variant, &mut registry, &config));
        assert!(media.muted.get());
    }
}
