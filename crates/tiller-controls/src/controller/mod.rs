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

//! The controls coordinator.
//!
//! [`MediaController`] is the orchestrator the embedder talks to: it weakly
//! binds a media session and a mounting surface, installs the controls
//! variant the layout-trait classification calls for, owns the support
//! objects that animate the variant's controls, and routes every external
//! event synchronously (see the router half of this module).
//!
//! Ownership is deliberately one-sided. The coordinator owns the variant,
//! the supports, and the listener registry outright; it owns neither the
//! media nor the surface, and every access to those resolves a weak handle
//! that degrades to an inert substitute once the real thing is gone.

use crate::stats::{StatsPanel, StatsPoller, StatsSnapshot};
use std::cell::RefCell;
use std::rc::Rc;

use tiller_core::config::ControlsConfig;
use tiller_core::event::ListenerRegistry;
use tiller_core::geometry::approx_eq;
use tiller_core::handle::WeakHandle;
use tiller_core::host::{ContextMenuOptions, HostContext};
use tiller_core::layout::{LayoutMode, LayoutTraits, StandardLayoutTraits};
use tiller_core::media::{self, FullscreenChannel, MediaSession, NullMedia, PresentationMode};
use tiller_core::support::{ControlsSupport, SupportContext};
use tiller_core::surface::{ElementHandle, MountSurface, NullSurface};
use tiller_core::variant::{ControlKind, ControlsVariant};

mod router;

/// Coordinates on-screen playback controls for one media element.
///
/// Single-threaded and strictly synchronous: every entry point completes
/// its state transitions before returning, and nothing is queued or
/// deferred.
pub struct MediaController {
    media: WeakHandle<dyn MediaSession>,
    surface: WeakHandle<dyn MountSurface>,
    host: Option<Rc<dyn HostContext>>,
    container: ElementHandle,
    fullscreen_channel: FullscreenChannel,
    has_played: bool,
    uses_ltr_layout: bool,
    variant: Option<ControlsVariant>,
    supports: Vec<Box<dyn ControlsSupport>>,
    registry: ListenerRegistry,
    config: ControlsConfig,
    stats: Option<Rc<RefCell<StatsPanel>>>,
    detached: bool,
}

impl MediaController {
    /// Binds a coordinator to `media` mounted on `surface`, with the
    /// default configuration.
    pub fn new(
        media: &Rc<dyn MediaSession>,
        surface: &Rc<dyn MountSurface>,
        host: Option<Rc<dyn HostContext>>,
    ) -> Self {
        Self::with_config(media, surface, host, ControlsConfig::default())
    }

    /// Binds a coordinator with explicit tunables.
    ///
    /// Installs the initial controls variant and its supports before
    /// returning, so the coordinator is fully live by the time the embedder
    /// sees it.
    pub fn with_config(
        media: &Rc<dyn MediaSession>,
        surface: &Rc<dyn MountSurface>,
        host: Option<Rc<dyn HostContext>>,
        config: ControlsConfig,
    ) -> Self {
        // The fullscreen channel is chosen once per media binding and kept
        // for the coordinator's whole life, reinitializations included.
        let fullscreen_channel = if media.supports_presentation_mode_api() {
            FullscreenChannel::PresentationMode
        } else {
            FullscreenChannel::Legacy
        };
        let has_played = !media.paused() || !media.played().is_empty();
        let container = ElementHandle::allocate();
        surface.attach(container);

        let mut controller = Self {
            media: WeakHandle::new(media, Rc::new(NullMedia)),
            surface: WeakHandle::new(surface, Rc::new(NullSurface)),
            host,
            container,
            fullscreen_channel,
            has_played,
            uses_ltr_layout: false,
            variant: None,
            supports: Vec::new(),
            registry: ListenerRegistry::new(),
            config,
            stats: None,
            detached: false,
        };
        log::info!(
            "Controls coordinator created on the {:?} fullscreen channel.",
            controller.fullscreen_channel
        );

        controller.update_controls_if_needed();
        let traits = controller.layout_traits();
        if let Some(host) = controller.host.as_deref() {
            host.set_controls_depend_on_page_scale(traits.controls_depend_on_page_scale_factor());
            if let Some(text_tracks) = host.text_track_container() {
                surface.attach(text_tracks);
            }
        }
        controller.flush_layout();
        controller
    }

    // --- CLASSIFICATION ---

    /// Whether the media is fullscreen, as seen through the adopted
    /// channel. On the modern channel, a host reporting in-window
    /// fullscreen counts.
    pub fn is_fullscreen(&self) -> bool {
        let media = self.media.resolve();
        media::is_fullscreen(&*media, self.fullscreen_channel, self.host.as_deref())
    }

    /// The presentation posture the classification runs against.
    pub fn layout_mode(&self) -> LayoutMode {
        if self.is_fullscreen() {
            LayoutMode::Fullscreen
        } else {
            LayoutMode::Inline
        }
    }

    /// The layout traits in force, re-derived from the host on every call.
    pub fn layout_traits(&self) -> Rc<dyn LayoutTraits> {
        let mode = self.layout_mode();
        match self.host.as_deref() {
            Some(host) => host.layout_traits_for(mode),
            None => Rc::new(StandardLayoutTraits::new(mode)),
        }
    }

    // --- PLAYBACK ENTRY POINTS ---

    /// Toggles playback. A rejected play request is logged and swallowed.
    pub fn toggle_playback(&mut self) {
        let media = self.media.resolve();
        media::toggle_playback(&*media, self.has_played);
    }

    /// A click fell through onto the background: toggle playback, but only
    /// while the controls are actually offered to the user.
    pub fn background_clicked(&mut self) {
        let media = self.media.resolve();
        let forced = self
            .host
            .as_deref()
            .map_or(false, |host| host.should_force_controls_display());
        if media.native_controls() || forced {
            media::toggle_playback(&*media, self.has_played);
        }
    }

    /// A tap gesture landed on the media: start playback when the
    /// native-controls flag is set (the start-button tap on overlay
    /// variants).
    pub fn tap_gesture_recognized(&mut self) {
        let media = self.media.resolve();
        if media.native_controls() {
            if let Err(error) = media.play() {
                log::debug!("Play request from tap gesture rejected: {error}");
            }
        }
    }

    /// A pinch-out gesture landed on the media: enter fullscreen.
    pub fn pinch_gesture_recognized(&mut self) {
        self.enter_fullscreen();
    }

    pub(crate) fn enter_fullscreen(&self) {
        let media = self.media.resolve();
        match self.fullscreen_channel {
            FullscreenChannel::PresentationMode => {
                media.set_presentation_mode(PresentationMode::Fullscreen)
            }
            FullscreenChannel::Legacy => media.enter_fullscreen(),
        }
    }

    pub(crate) fn exit_fullscreen(&self) {
        let media = self.media.resolve();
        match self.fullscreen_channel {
            FullscreenChannel::PresentationMode => {
                media.set_presentation_mode(PresentationMode::Inline)
            }
            FullscreenChannel::Legacy => media.exit_fullscreen(),
        }
    }

    // --- EMBEDDER-PUSHED STATE ---

    /// Pushes the page scale factor into the variant and refreshes the
    /// controls size. The host decides when to call this; whether the
    /// classification sizes controls from the page scale is reported to it
    /// at construction and on swap.
    pub fn set_page_scale_factor(&mut self, factor: f64) {
        if let Some(variant) = self.variant.as_mut() {
            variant.set_scale_factor(factor);
        }
        self.update_controls_size();
    }

    /// Pushes the page's layout direction into the variant.
    pub fn set_layout_direction(&mut self, ltr: bool) {
        if self.uses_ltr_layout == ltr {
            return;
        }
        self.uses_ltr_layout = ltr;
        if let Some(variant) = self.variant.as_mut() {
            variant.set_uses_ltr_layout(ltr);
        }
    }

    /// Records the fade outcome produced by the embedder's auto-hide
    /// scheduler. A change notifies every support and re-syncs text-track
    /// styling.
    pub fn set_controls_faded(&mut self, faded: bool) {
        let changed = match self.variant.as_mut() {
            Some(variant) => variant.set_faded(faded),
            None => false,
        };
        if !changed {
            return;
        }
        log::debug!("Controls fade state changed to {faded}.");
        self.for_each_support(|support, ctx| support.visibility_policy_changed(ctx));
        self.update_text_track_styling();
    }

    // --- CONTEXT MENU ---

    /// Asks the host to present a native context menu for `control`.
    ///
    /// Returns `false` without a host or when the host declines. While the
    /// menu shows, auto-hiding is parked via the variant's secondary-UI
    /// flag; the embedder reports dismissal through
    /// [`MediaController::context_menu_closed`].
    pub fn show_context_menu(&mut self, control: ControlKind, options: ContextMenuOptions) -> bool {
        let Some(host) = self.host.as_deref() else {
            return false;
        };
        if !host.show_context_menu(control, &options) {
            return false;
        }
        if let Some(variant) = self.variant.as_mut() {
            variant.set_has_secondary_ui_attached(true);
        }
        true
    }

    /// The host dismissed the context menu; auto-hiding may resume.
    pub fn context_menu_closed(&mut self) {
        if let Some(variant) = self.variant.as_mut() {
            variant.set_has_secondary_ui_attached(false);
        }
    }

    // --- LIFECYCLE ---

    /// Parks the coordinator when its surface detaches.
    ///
    /// The container is unmounted and the variant disabled, but both the
    /// variant instance and the support set are retained untouched so a
    /// later [`MediaController::reinitialize`] can revive them in place.
    pub fn deinitialize(&mut self) -> bool {
        let surface = self.surface.resolve();
        surface.detach(self.container);
        if let Some(variant) = self.variant.as_mut() {
            variant.disable();
        }
        self.detached = true;
        log::info!("Controls coordinator deinitialized.");
        true
    }

    /// Revives a parked coordinator onto a new media/surface pair.
    ///
    /// The retained variant keeps its element identity, and the fullscreen
    /// channel chosen at construction stays in force.
    pub fn reinitialize(
        &mut self,
        media: &Rc<dyn MediaSession>,
        surface: &Rc<dyn MountSurface>,
        host: Option<Rc<dyn HostContext>>,
    ) -> bool {
        self.media.rebind(media);
        self.surface.rebind(surface);
        self.host = host;
        surface.attach(self.container);
        if let Some(variant) = self.variant.as_mut() {
            variant.reenable();
        }
        self.detached = false;
        self.update_controls_size();
        log::info!("Controls coordinator reinitialized onto a new surface.");
        true
    }

    // --- STATS OVERLAY ---

    /// Shows or hides the stats overlay.
    ///
    /// Returns whether an overlay is live afterwards. Non-video media never
    /// gets an overlay; asking for one on audio tears any live panel down.
    pub fn set_showing_stats(&mut self, show: bool) -> bool {
        let media = self.media.resolve();
        if !media.is_video() || !show {
            self.teardown_stats();
            return false;
        }
        if self.stats.is_some() {
            return true;
        }
        let panel = StatsPanel::new();
        self.surface.resolve().attach(panel.element());
        log::info!("Showing the media stats overlay.");
        self.stats = Some(Rc::new(RefCell::new(panel)));
        true
    }

    fn teardown_stats(&mut self) {
        if let Some(panel) = self.stats.take() {
            self.surface.resolve().detach(panel.borrow().element());
            log::info!("Dropped the media stats overlay.");
        }
    }

    /// Hands out the cooperative sampler for the live overlay, if any.
    ///
    /// The poller observes the panel weakly; once the overlay is torn down
    /// its next poll returns `false` and the embedder's loop stops
    /// rescheduling.
    pub fn stats_poller(&self) -> Option<StatsPoller> {
        self.stats
            .as_ref()
            .map(|panel| StatsPoller::new(Rc::downgrade(panel)))
    }

    /// The most recent stats snapshot, when an overlay is live.
    pub fn stats_snapshot(&self) -> Option<StatsSnapshot> {
        self.stats.as_ref().map(|panel| panel.borrow().snapshot().clone())
    }

    pub(crate) fn store_stats_snapshot(&self, panel: &Rc<RefCell<StatsPanel>>) {
        panel.borrow_mut().set_snapshot(self.sample_stats());
    }

    fn sample_stats(&self) -> StatsSnapshot {
        let media = self.media.resolve();
        let surface = self.surface.resolve();

        let source = self
            .host
            .as_deref()
            .and_then(|host| host.source_type())
            .unwrap_or_else(|| "none".to_string());

        let extent = self.variant.as_ref().map(|v| v.size()).unwrap_or_default();
        let ratio = surface.device_pixel_ratio();
        let viewport = if approx_eq(ratio, 1.0) {
            format!("{}x{}", extent.width, extent.height)
        } else {
            format!("{}x{} @{}x", extent.width, extent.height, ratio)
        };

        let quality = media.playback_quality();
        let frames = format!(
            "{} dropped of {}",
            quality.dropped_video_frames, quality.total_video_frames
        );

        let (resolution, codecs, color) = match media.selected_video_track() {
            Some(track) => {
                let none = || "none".to_string();
                (
                    format!("{}x{} ({:.3}fps)", track.width, track.height, track.frame_rate),
                    track.codec.unwrap_or_else(none),
                    format!(
                        "{} / {} / {}",
                        track.color_primaries.unwrap_or_else(none),
                        track.color_transfer.unwrap_or_else(none),
                        track.color_matrix.unwrap_or_else(none)
                    ),
                )
            }
            None => (
                "none".to_string(),
                "none".to_string(),
                "none / none / none".to_string(),
            ),
        };

        StatsSnapshot {
            source,
            viewport,
            frames,
            resolution,
            codecs,
            color,
        }
    }

    // --- TESTING HOOKS AND ACCESSORS ---

    /// Testing override forwarded to the live variant; a later swap resets
    /// it along with the rest of the variant state.
    pub fn set_maximum_right_container_button_count_override(&mut self, count: Option<usize>) {
        if let Some(variant) = self.variant.as_mut() {
            variant.set_maximum_right_container_button_count_override(count);
        }
    }

    /// The live controls variant.
    pub fn variant(&self) -> Option<&ControlsVariant> {
        self.variant.as_ref()
    }

    /// Whether playback has ever begun on the bound media.
    #[inline]
    pub fn has_played(&self) -> bool {
        self.has_played
    }

    /// The controls container's element identity.
    #[inline]
    pub fn container(&self) -> ElementHandle {
        self.container
    }

    /// The fullscreen channel adopted at construction.
    #[inline]
    pub fn fullscreen_channel(&self) -> FullscreenChannel {
        self.fullscreen_channel
    }

    /// Whether the coordinator is currently deinitialized.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// The tunables this coordinator runs with.
    #[inline]
    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    // --- SUPPORT PLUMBING ---

    /// Runs `action` over every support with a freshly assembled context.
    /// The borrows are disjoint fields of `self`, which is what lets the
    /// supports mutate the variant and registry while being iterated.
    pub(crate) fn for_each_support(
        &mut self,
        mut action: impl FnMut(&mut Box<dyn ControlsSupport>, &mut SupportContext<'_>),
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
        for support in &mut self.supports {
            action(support, &mut ctx);
        }
    }

    /// Releases every support's registration. Safe to run on supports that
    /// are already disabled.
    pub(crate) fn disable_supports(&mut self) {
        for support in &mut self.supports {
            support.disable(&mut self.registry);
        }
    }
}
