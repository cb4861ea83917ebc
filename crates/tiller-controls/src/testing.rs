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

//! Shared test doubles for the unit tests in this crate.

use std::cell::{Cell, RefCell};
use tiller_core::error::PlaybackCommandError;
use tiller_core::host::HostContext;
use tiller_core::media::{
    MediaSession, PlaybackQuality, PresentationMode, TimeRanges, VideoTrackInfo,
};

/// A scriptable media session backed by interior-mutable fields.
pub(crate) struct StubMedia {
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

/// A scriptable host for capability-flag tests.
#[derive(Default)]
pub(crate) struct StubHost {
    pub force_controls: Cell<bool>,
    pub seeking: Cell<bool>,
    pub rewind: Cell<bool>,
    pub in_window: Cell<bool>,
}

impl StubHost {
    pub(crate) fn new() -> Self {
        Self {
            force_controls: Cell::new(false),
            seeking: Cell::new(true),
            rewind: Cell::new(true),
            in_window: Cell::new(false),
        }
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
}
