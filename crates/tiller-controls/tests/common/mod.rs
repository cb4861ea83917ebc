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

//! Scriptable stub collaborators shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tiller_core::error::PlaybackCommandError;
use tiller_core::geometry::{Rect, Transform2D};
use tiller_core::host::HostContext;
use tiller_core::layout::{
    LayoutMode, LayoutTraits, StandardLayoutTraits, SupportKind, VariantKind, FULL_SUPPORT_SET,
};
use tiller_core::media::{
    MediaSession, PlaybackQuality, PresentationMode, TimeRanges, VideoTrackInfo,
};
use tiller_core::surface::{ElementHandle, MountSurface};

/// Wires the stubs to a coordinator, keeping the strong references with
/// the caller so decay can be scripted by dropping them.
pub fn coordinator(
    media: &Rc<StubMedia>,
    surface: &Rc<RecordingSurface>,
    host: Option<&Rc<StubHost>>,
) -> tiller_controls::MediaController {
    let media_dyn: Rc<dyn MediaSession> = media.clone();
    let surface_dyn: Rc<dyn MountSurface> = surface.clone();
    let host_dyn = host.map(|host| host.clone() as Rc<dyn HostContext>);
    tiller_controls::MediaController::new(&media_dyn, &surface_dyn, host_dyn)
}

/// A media session whose every observable is a scriptable cell.
pub struct StubMedia {
    pub is_video: Cell<bool>,
    pub paused: Cell<bool>,
    pub current_time: Cell<f64>,
    pub duration: Cell<f64>,
    pub playback_rate: Cell<f64>,
    pub volume: Cell<f64>,
    pub muted: Cell<bool>,
    pub native_controls: Cell<bool>,
    pub seekable: RefCell<TimeRanges>,
    pub played: RefCell<TimeRanges>,
    pub presentation_mode: Cell<PresentationMode>,
    pub supports_presentation_mode_api: Cell<bool>,
    pub displaying_fullscreen: Cell<bool>,
    pub video_track_count: Cell<usize>,
    pub track: RefCell<Option<VideoTrackInfo>>,
    pub quality: Cell<PlaybackQuality>,
    pub reject_play: Cell<bool>,
    pub play_calls: Cell<usize>,
    pub pause_calls: Cell<usize>,
}

impl Default for StubMedia {
    fn default() -> Self {
        Self {
            is_video: Cell::new(true),
            paused: Cell::new(true),
            current_time: Cell::new(0.0),
            duration: Cell::new(120.0),
            playback_rate: Cell::new(1.0),
            volume: Cell::new(1.0),
            muted: Cell::new(false),
            native_controls: Cell::new(true),
            seekable: RefCell::new(TimeRanges::single(0.0, 120.0)),
            played: RefCell::new(TimeRanges::empty()),
            presentation_mode: Cell::new(PresentationMode::Inline),
            supports_presentation_mode_api: Cell::new(true),
            displaying_fullscreen: Cell::new(false),
            video_track_count: Cell::new(1),
            track: RefCell::new(None),
            quality: Cell::new(PlaybackQuality::default()),
            reject_play: Cell::new(false),
            play_calls: Cell::new(0),
            pause_calls: Cell::new(0),
        }
    }
}

impl StubMedia {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl MediaSession for StubMedia {
    fn is_video(&self) -> bool {
        self.is_video.get()
    }

    fn paused(&self) -> bool {
        self.paused.get()
    }

    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate.get()
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn muted(&self) -> bool {
        self.muted.get()
    }

    fn native_controls(&self) -> bool {
        self.native_controls.get()
    }

    fn seekable(&self) -> TimeRanges {
        self.seekable.borrow().clone()
    }

    fn played(&self) -> TimeRanges {
        self.played.borrow().clone()
    }

    fn play(&self) -> Result<(), PlaybackCommandError> {
        self.play_calls.set(self.play_calls.get() + 1);
        if self.reject_play.get() {
            return Err(PlaybackCommandError::NotAllowed);
        }
        self.paused.set(false);
        Ok(())
    }

    fn pause(&self) {
        self.pause_calls.set(self.pause_calls.get() + 1);
        self.paused.set(true);
    }

    fn set_current_time(&self, seconds: f64) {
        self.current_time.set(seconds);
    }

    fn set_playback_rate(&self, rate: f64) {
        self.playback_rate.set(rate);
    }

    fn set_volume(&self, volume: f64) {
        self.volume.set(volume);
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }

    fn presentation_mode(&self) -> PresentationMode {
        self.presentation_mode.get()
    }

    fn supports_presentation_mode_api(&self) -> bool {
        self.supports_presentation_mode_api.get()
    }

    fn set_presentation_mode(&self, mode: PresentationMode) {
        self.presentation_mode.set(mode);
    }

    fn displaying_fullscreen(&self) -> bool {
        self.displaying_fullscreen.get()
    }

    fn enter_fullscreen(&self) {
        self.displaying_fullscreen.set(true);
    }

    fn exit_fullscreen(&self) {
        self.displaying_fullscreen.set(false);
    }

    fn video_track_count(&self) -> usize {
        self.video_track_count.get()
    }

    fn selected_video_track(&self) -> Option<VideoTrackInfo> {
        self.track.borrow().clone()
    }

    fn playback_quality(&self) -> PlaybackQuality {
        self.quality.get()
    }
}

/// A surface that records every child-management call.
pub struct RecordingSurface {
    pub bounds: Cell<Rect>,
    pub transforms: RefCell<Vec<Transform2D>>,
    pub mounted: RefCell<Vec<ElementHandle>>,
    pub attach_calls: Cell<usize>,
    pub detach_calls: Cell<usize>,
    pub replace_calls: Cell<usize>,
    pub pixel_ratio: Cell<f64>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            bounds: Cell::new(Rect::new(0.0, 0.0, 640.0, 360.0)),
            transforms: RefCell::new(Vec::new()),
            mounted: RefCell::new(Vec::new()),
            attach_calls: Cell::new(0),
            detach_calls: Cell::new(0),
            replace_calls: Cell::new(0),
            pixel_ratio: Cell::new(1.0),
        }
    }
}

impl RecordingSurface {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn is_mounted(&self, element: ElementHandle) -> bool {
        self.mounted.borrow().contains(&element)
    }

    pub fn mutation_count(&self) -> usize {
        self.attach_calls.get() + self.detach_calls.get() + self.replace_calls.get()
    }
}

impl MountSurface for RecordingSurface {
    fn controls_bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn ancestor_transforms(&self) -> Vec<Transform2D> {
        self.transforms.borrow().clone()
    }

    fn attach(&self, child: ElementHandle) {
        self.attach_calls.set(self.attach_calls.get() + 1);
        self.mounted.borrow_mut().push(child);
    }

    fn detach(&self, child: ElementHandle) {
        self.detach_calls.set(self.detach_calls.get() + 1);
        self.mounted.borrow_mut().retain(|mounted| *mounted != child);
    }

    fn replace(&self, old: ElementHandle, new: ElementHandle) {
        self.replace_calls.set(self.replace_calls.get() + 1);
        let mut mounted = self.mounted.borrow_mut();
        match mounted.iter().position(|element| *element == old) {
            Some(index) => mounted[index] = new,
            None => mounted.push(new),
        }
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.pixel_ratio.get()
    }
}

/// Layout traits that can veto availability or demand the reduced overlay,
/// for the policy tests.
struct ScriptedTraits {
    mode: LayoutMode,
    never_available: bool,
    inline_overlay: bool,
}

impl LayoutTraits for ScriptedTraits {
    fn mode(&self) -> LayoutMode {
        self.mode
    }

    fn variant_kind(&self) -> VariantKind {
        if self.inline_overlay && self.mode == LayoutMode::Inline {
            VariantKind::InlineOverlay
        } else {
            StandardLayoutTraits::new(self.mode).variant_kind()
        }
    }

    fn support_kinds(&self) -> Vec<SupportKind> {
        if self.variant_kind() == VariantKind::InlineOverlay {
            vec![SupportKind::PlayPause, SupportKind::Fullscreen]
        } else {
            FULL_SUPPORT_SET.to_vec()
        }
    }

    fn controls_never_available(&self) -> bool {
        self.never_available
    }
}

/// A host whose capability flags are scriptable cells.
pub struct StubHost {
    pub force_controls: Cell<bool>,
    pub seeking: Cell<bool>,
    pub rewind: Cell<bool>,
    pub in_window: Cell<bool>,
    pub never_available: Cell<bool>,
    pub inline_overlay: Cell<bool>,
    pub needs_chrome_part: Cell<bool>,
    pub auto_hide_override: Cell<Option<Duration>>,
    pub source_label: RefCell<Option<String>>,
    pub presentation_mode_changes: Cell<usize>,
    pub text_track_bar_visible: Cell<Option<bool>>,
}

impl Default for StubHost {
    fn default() -> Self {
        Self {
            force_controls: Cell::new(false),
            seeking: Cell::new(true),
            rewind: Cell::new(true),
            in_window: Cell::new(false),
            never_available: Cell::new(false),
            inline_overlay: Cell::new(false),
            needs_chrome_part: Cell::new(false),
            auto_hide_override: Cell::new(None),
            source_label: RefCell::new(None),
            presentation_mode_changes: Cell::new(0),
            text_track_bar_visible: Cell::new(None),
        }
    }
}

impl StubHost {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl HostContext for StubHost {
    fn should_force_controls_display(&self) -> bool {
        self.force_controls.get()
    }

    fn supports_seeking(&self) -> bool {
        self.seeking.get()
    }

    fn supports_rewind(&self) -> bool {
        self.rewind.get()
    }

    fn in_window_fullscreen(&self) -> bool {
        self.in_window.get()
    }

    fn needs_chrome_media_controls_part(&self) -> bool {
        self.needs_chrome_part.get()
    }

    fn layout_traits_for(&self, mode: LayoutMode) -> Rc<dyn LayoutTraits> {
        Rc::new(ScriptedTraits {
            mode,
            never_available: self.never_available.get(),
            inline_overlay: self.inline_overlay.get(),
        })
    }

    fn auto_hide_delay_override(&self) -> Option<Duration> {
        self.auto_hide_override.get()
    }

    fn presentation_mode_changed(&self) {
        self.presentation_mode_changes
            .set(self.presentation_mode_changes.get() + 1);
    }

    fn source_type(&self) -> Option<String> {
        self.source_label.borrow().clone()
    }

    fn set_text_track_bar_visible(&self, visible: bool) {
        self.text_track_bar_visible.set(Some(visible));
    }
}
