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

//! The per-concern support objects and their factory.
//!
//! Each support binds one control of the active variant to one slice of
//! media state. They are built in classification order when a variant is
//! installed, enabled and disabled in lockstep with controls availability,
//! and discarded before the next variant goes in.

use tiller_core::event::{ListenerBinding, ListenerRegistry, MediaEventKind};
use tiller_core::layout::SupportKind;
use tiller_core::support::ControlsSupport;

// --- Declare Sub-Modules ---

mod fullscreen;
mod mute;
mod play_pause;
mod skip_back;
mod skip_forward;
mod volume;

// --- Re-export Principal Types ---

pub use self::fullscreen::FullscreenSupport;
pub use self::mute::MuteSupport;
pub use self::play_pause::PlayPauseSupport;
pub use self::skip_back::SkipBackSupport;
pub use self::skip_forward::SkipForwardSupport;
pub use self::volume::VolumeSupport;

/// One media-event registration, held between enable and disable.
///
/// Every support embeds one of these; it is the concrete carrier of the
/// subscription discipline. Acquire is a no-op while a binding is already
/// held, so re-enabling an enabled support never double-subscribes.
#[derive(Debug, Default)]
pub(crate) struct EventInterest {
    binding: Option<ListenerBinding>,
}

impl EventInterest {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Subscribes `kind` to `events` unless a binding is already held.
    pub(crate) fn acquire(
        &mut self,
        kind: SupportKind,
        events: &[MediaEventKind],
        registry: &mut ListenerRegistry,
    ) {
        if self.binding.is_none() {
            self.binding = Some(registry.subscribe(kind, events));
        }
    }

    /// Releases the held binding, if any.
    pub(crate) fn release(&mut self, registry: &mut ListenerRegistry) {
        if let Some(binding) = self.binding.take() {
            registry.release(binding);
        }
    }

    /// Whether a binding is currently held.
    pub(crate) fn is_held(&self) -> bool {
        self.binding.is_some()
    }
}

/// Builds the support objects for `kinds`, preserving the classification's
/// order. Construction order is subscription order is fan-out order.
pub fn build_supports(kinds: &[SupportKind]) -> Vec<Box<dyn ControlsSupport>> {
    kinds
        .iter()
        .map(|kind| -> Box<dyn ControlsSupport> {
            match kind {
                SupportKind::PlayPause => Box::new(PlayPauseSupport::new()),
                SupportKind::SkipBack => Box::new(SkipBackSupport::new()),
                SupportKind::SkipForward => Box::new(SkipForwardSupport::new()),
                SupportKind::Volume => Box::new(VolumeSupport::new()),
                SupportKind::Mute => Box::new(MuteSupport::new()),
                SupportKind::Fullscreen => Box::new(FullscreenSupport::new()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiller_core::layout::FULL_SUPPORT_SET;

    #[test]
    fn test_build_supports_preserves_classification_order() {
        let supports = build_supports(&FULL_SUPPORT_SET);
        let kinds: Vec<SupportKind> = supports.iter().map(|support| support.kind()).collect();
        assert_eq!(kinds, FULL_SUPPORT_SET.to_vec());
    }

    #[test]
    fn test_build_supports_for_reduced_sets() {
        let supports = build_supports(&[SupportKind::Fullscreen, SupportKind::PlayPause]);
        assert_eq!(supports.len(), 2);
        assert_eq!(supports[0].kind(), SupportKind::Fullscreen);
        assert_eq!(supports[1].kind(), SupportKind::PlayPause);
    }

    #[test]
    fn test_event_interest_acquire_is_idempotent() {
        let mut registry = ListenerRegistry::new();
        let mut interest = EventInterest::new();
        interest.acquire(
            SupportKind::Mute,
            &[MediaEventKind::VolumeChange],
            &mut registry,
        );
        interest.acquire(
            SupportKind::Mute,
            &[MediaEventKind::VolumeChange],
            &mut registry,
        );
        assert!(interest.is_held());
        assert!(registry.is_subscribed(SupportKind::Mute));

        interest.release(&mut registry);
        assert!(!interest.is_held());
        assert!(registry.is_empty());
        interest.release(&mut registry);
    }
}
