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

//! Event routing, the variant swap path, and the availability policy.
//!
//! Routing is synchronous and exclusive: one event matches one primary
//! handler, and the disposition is final when `handle_event` returns.
//! Media-origin events additionally re-run classification and availability
//! and fan out to the interested supports, which is the one non-exclusive
//! step in the table.

use super::MediaController;
use crate::supports::build_supports;

use tiller_core::event::{ControlsEvent, EventDisposition, EventTarget, KeyOrigin, MediaEventKind};
use tiller_core::geometry::untransformed_extent;
use tiller_core::layout::VariantKind;
use tiller_core::media::PresentationMode;
use tiller_core::support::{ControlsSupport, SupportContext};
use tiller_core::variant::{ControlKind, ControlsVariant};

impl MediaController {
    /// Routes one external event and returns its disposition.
    ///
    /// All effects complete before this returns; nothing is queued for a
    /// later turn. The resize path additionally commits pending layout in
    /// the same dispatch so the controls never lag the media's visual size.
    pub fn handle_event(&mut self, event: ControlsEvent) -> EventDisposition {
        log::trace!("Routing {event:?}.");
        let mut disposition = EventDisposition::untouched();

        match &event {
            ControlsEvent::TracksChanged => self.update_controls_if_needed(),
            ControlsEvent::SurfaceResized => {
                self.update_controls_if_needed();
                self.flush_layout();
            }
            ControlsEvent::SurfaceFullscreenChanged | ControlsEvent::NativeControlsChanged => {
                self.update_controls_availability();
            }
            ControlsEvent::KeyDown { key, origin } => {
                if self.routes_key(*origin) && key == " " && self.is_fullscreen() {
                    self.toggle_playback();
                    disposition.default_prevented = true;
                    disposition.propagation_stopped = true;
                }
            }
            ControlsEvent::KeyUp { key, origin } => {
                // The key-up half of a swallowed space press is swallowed
                // too, so the page never sees an unpaired key event.
                if self.routes_key(*origin) && key == " " && self.is_fullscreen() {
                    disposition.default_prevented = true;
                    disposition.propagation_stopped = true;
                }
            }
            ControlsEvent::DragStart => {
                // Dragging fullscreen HUD controls must not start a page
                // drag, which would exit fullscreen by accident.
                let hud_live = self
                    .variant()
                    .map_or(false, |variant| variant.kind() == VariantKind::FullscreenHud);
                if hud_live {
                    disposition.default_prevented = true;
                }
            }
            ControlsEvent::PresentationModeChanged => {
                if let Some(host) = self.host.as_deref() {
                    host.presentation_mode_changed();
                }
            }
            ControlsEvent::Click { target } => {
                let in_window = self
                    .host
                    .as_deref()
                    .map_or(false, |host| host.in_window_fullscreen());
                if in_window {
                    match target {
                        EventTarget::Media => {
                            // A click that fell through the controls onto
                            // the media leaves in-window fullscreen.
                            self.exit_fullscreen();
                            disposition.propagation_stopped = true;
                        }
                        EventTarget::Controls => disposition.propagation_stopped = true,
                        EventTarget::Surface => {}
                    }
                }
            }
            ControlsEvent::Media(_) => {}
        }

        if Self::is_media_origin(&event) {
            if matches!(event, ControlsEvent::Media(MediaEventKind::Play)) && !self.has_played {
                log::debug!("Playback began for the first time.");
                self.has_played = true;
            }
            self.update_controls_if_needed();
            self.update_controls_availability();
            if let ControlsEvent::Media(kind) = event {
                self.fan_out_media_event(kind);
            }
        }

        disposition
    }

    /// Window-origin keys are ignored once the coordinator is detached;
    /// media-origin keys keep flowing for the embedder's sake.
    fn routes_key(&self, origin: KeyOrigin) -> bool {
        !(self.detached && origin == KeyOrigin::Window)
    }

    fn is_media_origin(event: &ControlsEvent) -> bool {
        match event {
            ControlsEvent::Media(_) | ControlsEvent::PresentationModeChanged => true,
            ControlsEvent::KeyDown { origin, .. } | ControlsEvent::KeyUp { origin, .. } => {
                *origin == KeyOrigin::Media
            }
            ControlsEvent::Click { target } => *target == EventTarget::Media,
            _ => false,
        }
    }

    /// Fans one media event out to the interested supports, in
    /// subscription order. Disabled supports hold no registration, so they
    /// are skipped by construction.
    fn fan_out_media_event(&mut self, kind: MediaEventKind) {
        let interested = self.registry.interested(kind);
        if interested.is_empty() {
            return;
        }
        let media = self.media.resolve();
        let Some(variant) = self.variant.as_mut() else {
            return;
        };
        let mut ctx = SupportContext {
            media: &*media,
            variant,
            host: self.host.as_deref(),
            registry: &mut self.registry,
            config: &self.config,
            has_played: self.has_played,
            fullscreen_channel: self.fullscreen_channel,
        };
        for support_kind in interested {
            if let Some(support) = self
                .supports
                .iter_mut()
                .find(|support| support.kind() == support_kind)
            {
                support.media_event(kind, &mut ctx);
            }
        }
    }

    // --- CONTROL ACTUATION ---

    /// A control on the variant was pressed; dispatches to the enabled
    /// support bound to it.
    pub fn control_activated(&mut self, control: ControlKind) {
        self.dispatch_to_bound_support(control, |support, ctx| support.control_activated(ctx));
    }

    /// A slider-like control committed a new value.
    pub fn control_value_changed(&mut self, control: ControlKind, value: f64) {
        self.dispatch_to_bound_support(control, |support, ctx| {
            support.control_value_changed(value, ctx)
        });
    }

    fn dispatch_to_bound_support(
        &mut self,
        control: ControlKind,
        action: impl FnOnce(&mut Box<dyn ControlsSupport>, &mut SupportContext<'_>),
    ) {
        let media = self.media.resolve();
        let Some(variant) = self.variant.as_mut() else {
            return;
        };
        let mut ctx = SupportContext {
            media: &*media,
            variant,
            host: self.host.as_deref(),
            registry: &mut self.registry,
            config: &self.config,
            has_played: self.has_played,
            fullscreen_channel: self.fullscreen_channel,
        };
        let bound = self
            .supports
            .iter_mut()
            .find(|support| support.is_enabled() && support.bound_control() == Some(control));
        if let Some(support) = bound {
            action(support, &mut ctx);
        }
    }

    // --- VARIANT UPDATE PATH ---

    /// Re-derives the classification and swaps the variant when it calls
    /// for a different kind. Idempotent under unchanged classification:
    /// the same-kind path only re-syncs text-track styling and geometry.
    pub(crate) fn update_controls_if_needed(&mut self) {
        let traits = self.layout_traits();
        let required = traits.variant_kind();
        if self.variant.as_ref().map(ControlsVariant::kind) == Some(required) {
            self.update_text_track_styling();
            self.update_controls_size();
            return;
        }

        // Strict teardown order: supports release their subscriptions
        // before the old variant goes away.
        self.disable_supports();
        self.supports.clear();

        let previous = self.variant.take();
        let mut fresh = ControlsVariant::new(required, &self.config);
        match previous {
            Some(mut old) => {
                old.disable();
                fresh.set_auto_hide_delay(old.auto_hide_delay());
                fresh.set_uses_ltr_layout(old.uses_ltr_layout());
                fresh.fade_in();
                self.surface.resolve().replace(old.element(), fresh.element());
                log::info!(
                    "Swapped controls variant {:?} -> {:?}.",
                    old.kind(),
                    required
                );
            }
            None => {
                self.surface.resolve().attach(fresh.element());
                log::info!("Installed the initial controls variant {required:?}.");
            }
        }
        if let Some(host) = self.host.as_deref() {
            if let Some(delay) = host.auto_hide_delay_override() {
                fresh.set_auto_hide_delay(delay);
            }
            host.set_controls_depend_on_page_scale(traits.controls_depend_on_page_scale_factor());
        }
        self.variant = Some(fresh);

        self.update_text_track_styling();
        self.update_controls_size();

        self.supports = build_supports(&traits.support_kinds());
        self.for_each_support(|support, ctx| support.enable(ctx));

        // In-window fullscreen without a rewind capability loses the
        // rewind button; the slot stays so the control order is stable.
        let drops_rewind = self.host.as_deref().map_or(false, |host| {
            host.in_window_fullscreen() && !host.supports_rewind()
        });
        let wants_part = self
            .host
            .as_deref()
            .map_or(false, |host| host.needs_chrome_media_controls_part());
        if drops_rewind {
            if let Some(variant) = self.variant.as_mut() {
                variant.drop_control(ControlKind::Rewind);
            }
        }

        self.update_controls_availability();

        if wants_part {
            if let Some(variant) = self.variant.as_mut() {
                variant.set_wants_user_agent_part(true);
            }
        }
    }

    // --- AVAILABILITY ---

    /// Recomputes whether the controls are offered to the user and toggles
    /// support enablement to match. The only path besides the swap itself
    /// that enables or disables supports.
    pub(crate) fn update_controls_availability(&mut self) {
        let available = self.should_controls_be_available();
        if available {
            self.for_each_support(|support, ctx| support.enable(ctx));
        } else {
            self.disable_supports();
        }
        let flipped = match self.variant.as_mut() {
            Some(variant) => variant.set_visible(available),
            None => false,
        };
        if flipped {
            log::debug!("Controls availability flipped to {available}.");
            self.for_each_support(|support, ctx| support.visibility_policy_changed(ctx));
        }
    }

    /// The availability predicate, evaluated as a short-circuiting AND
    /// chain.
    fn should_controls_be_available(&self) -> bool {
        if self.layout_traits().controls_never_available() {
            return false;
        }
        let media = self.media.resolve();
        let overlay_in_pip = self.variant.as_ref().map_or(false, |variant| {
            variant.kind() == VariantKind::InlineOverlay
                && media.presentation_mode() == PresentationMode::PictureInPicture
        });
        if overlay_in_pip {
            return false;
        }
        media.native_controls()
            || self
                .host
                .as_deref()
                .map_or(false, |host| host.should_force_controls_display())
    }

    // --- GEOMETRY ---

    /// Recomputes the variant's untransformed size from the surface. A
    /// singular ancestor transform keeps the previous size; the next
    /// resize event repairs it.
    pub(crate) fn update_controls_size(&mut self) {
        let surface = self.surface.resolve();
        let Some(variant) = self.variant.as_mut() else {
            return;
        };
        let bounds = surface.controls_bounds();
        let transforms = surface.ancestor_transforms();
        match untransformed_extent(bounds, &transforms, variant.scale_factor()) {
            Some(extent) => variant.set_size(extent),
            None => log::warn!(
                "Ancestor transform chain is singular; keeping controls size {:?}.",
                variant.size()
            ),
        }
    }

    /// Commits pending size or scale changes immediately.
    pub(crate) fn flush_layout(&mut self) {
        if let Some(variant) = self.variant.as_mut() {
            if variant.commit_layout() {
                log::trace!("Committed controls layout at {:?}.", variant.size());
            }
        }
    }

    // --- TEXT TRACKS ---

    /// Keeps the host's caption container styled against the controls
    /// bar: the bar-visible styling applies while the controls are not
    /// faded. Fullscreen classifications skip this; captions are the
    /// fullscreen chrome's concern there.
    pub(crate) fn update_text_track_styling(&mut self) {
        if self.layout_traits().is_fullscreen() {
            return;
        }
        let Some(host) = self.host.as_deref() else {
            return;
        };
        let faded = self.variant.as_ref().map_or(false, ControlsVariant::is_faded);
        host.set_text_track_bar_visible(!faded);
    }
}
