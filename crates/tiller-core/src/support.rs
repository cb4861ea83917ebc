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

//! The per-control behavior protocol.
//!
//! Every control a variant renders is animated by one [`ControlsSupport`]:
//! a small object that declares which media events it cares about, keeps
//! its control's state in sync with the media, and translates user
//! interaction on the control back into media commands. Supports are built
//! when a variant is installed and live until the next swap; between those
//! points they cycle through enable/disable as controls availability
//! changes.
//!
//! The enable/disable pairing carries the subscription discipline: enable
//! registers the support's media-event interest (at most once) and always
//! re-syncs the control, disable releases the registration. A disabled
//! support receives no media events because the registry no longer names
//! it.

use crate::config::ControlsConfig;
use crate::event::{ListenerRegistry, MediaEventKind};
use crate::host::HostContext;
use crate::layout::{LayoutMode, LayoutTraits, StandardLayoutTraits, SupportKind};
use crate::media::{self, FullscreenChannel, MediaSession, PresentationMode};
use crate::variant::{ControlKind, ControlsVariant};
use std::rc::Rc;

/// The borrow bundle a support works against for one dispatch.
///
/// Assembled by the coordinator just before calling into a support and
/// dropped right after, so a support never holds onto media or variant
/// state across dispatches.
pub struct SupportContext<'a> {
    /// The resolved media session.
    pub media: &'a dyn MediaSession,
    /// The live controls variant.
    pub variant: &'a mut ControlsVariant,
    /// The host context, when the embedder supplied one.
    pub host: Option<&'a dyn HostContext>,
    /// The registry media-event interests are recorded in.
    pub registry: &'a mut ListenerRegistry,
    /// The coordinator's tuning values.
    pub config: &'a ControlsConfig,
    /// Whether playback has ever begun on the bound media.
    pub has_played: bool,
    /// The fullscreen channel adopted for the bound media.
    pub fullscreen_channel: FullscreenChannel,
}

impl<'a> SupportContext<'a> {
    /// Whether the media is fullscreen, as seen through the adopted channel.
    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        media::is_fullscreen(self.media, self.fullscreen_channel, self.host)
    }

    /// Asks the media to enter fullscreen over the adopted channel.
    pub fn enter_fullscreen(&self) {
        match self.fullscreen_channel {
            FullscreenChannel::PresentationMode => {
                self.media.set_presentation_mode(PresentationMode::Fullscreen)
            }
            FullscreenChannel::Legacy => self.media.enter_fullscreen(),
        }
    }

    /// Asks the media to leave fullscreen over the adopted channel.
    pub fn exit_fullscreen(&self) {
        match self.fullscreen_channel {
            FullscreenChannel::PresentationMode => {
                self.media.set_presentation_mode(PresentationMode::Inline)
            }
            FullscreenChannel::Legacy => self.media.exit_fullscreen(),
        }
    }

    /// Issues the play/pause toggle.
    #[inline]
    pub fn toggle_playback(&self) {
        media::toggle_playback(self.media, self.has_played);
    }

    /// The layout traits in force for the current presentation posture,
    /// re-derived from the host (or the standard classification).
    pub fn layout_traits(&self) -> Rc<dyn LayoutTraits> {
        let mode = if self.is_fullscreen() {
            LayoutMode::Fullscreen
        } else {
            LayoutMode::Inline
        };
        match self.host {
            Some(host) => host.layout_traits_for(mode),
            None => Rc::new(StandardLayoutTraits::new(mode)),
        }
    }
}

/// Behavior attached to one control of the active variant.
pub trait ControlsSupport {
    /// Which support this is.
    fn kind(&self) -> SupportKind;

    /// The control this support drives, when it drives one. The mapping is
    /// static; whether the active variant actually carries the control is
    /// checked at sync time.
    fn bound_control(&self) -> Option<ControlKind> {
        None
    }

    /// The media events this support wants fanned out to it.
    fn media_events(&self) -> &'static [MediaEventKind];

    /// Activates the support: registers its media-event interest when it
    /// holds none yet, then unconditionally re-syncs its control.
    ///
    /// Called again on every availability flip to "available", so
    /// implementations must tolerate being enabled while already enabled.
    fn enable(&mut self, ctx: &mut SupportContext<'_>);

    /// Deactivates the support, releasing its media-event registration.
    ///
    /// Takes the registry alone because disable runs during variant
    /// teardown, when no full context can be assembled.
    fn disable(&mut self, registry: &mut ListenerRegistry);

    /// Whether the support currently holds a registration.
    fn is_enabled(&self) -> bool;

    /// Re-derives the control's state from the media.
    fn sync_control(&mut self, ctx: &mut SupportContext<'_>);

    /// Delivers one media event. The default re-syncs the control when the
    /// event is in [`ControlsSupport::media_events`] and ignores it
    /// otherwise.
    fn media_event(&mut self, event: MediaEventKind, ctx: &mut SupportContext<'_>) {
        if self.media_events().contains(&event) {
            self.sync_control(ctx);
        }
    }

    /// The user actuated the control (pressed the button).
    fn control_activated(&mut self, _ctx: &mut SupportContext<'_>) {}

    /// The user committed a new value on the control (moved the slider).
    fn control_value_changed(&mut self, _value: f64, _ctx: &mut SupportContext<'_>) {}

    /// The controls' user visibility changed (faded in or out).
    fn visibility_policy_changed(&mut self, _ctx: &mut SupportContext<'_>) {}
}
