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

//! The inert media session a weak handle falls back to.

use crate::error::PlaybackCommandError;
use crate::media::{MediaSession, PlaybackQuality, PresentationMode, TimeRanges, VideoTrackInfo};

/// A media session representing a media element that no longer exists.
///
/// Reads mirror the shape of a freshly detached element: zero duration,
/// empty ranges, inline presentation, full volume. `paused()` reports
/// `false`, so a playback toggle against the null session issues a harmless
/// accepted play request rather than a pause. Commands are accepted and
/// ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMedia;

impl MediaSession for NullMedia {
    fn is_video(&self) -> bool {
        false
    }

    fn paused(&self) -> bool {
        false
    }

    fn current_time(&self) -> f64 {
        0.0
    }

    fn duration(&self) -> f64 {
        0.0
    }

    fn playback_rate(&self) -> f64 {
        1.0
    }

    fn volume(&self) -> f64 {
        1.0
    }

    fn muted(&self) -> bool {
        false
    }

    fn native_controls(&self) -> bool {
        false
    }

    fn seekable(&self) -> TimeRanges {
        TimeRanges::empty()
    }

    fn played(&self) -> TimeRanges {
        TimeRanges::empty()
    }

    fn play(&self) -> Result<(), PlaybackCommandError> {
        Ok(())
    }

    fn pause(&self) {}

    fn set_current_time(&self, _seconds: f64) {}

    fn set_playback_rate(&self, _rate: f64) {}

    fn set_volume(&self, _volume: f64) {}

    fn set_muted(&self, _muted: bool) {}

    fn presentation_mode(&self) -> PresentationMode {
        PresentationMode::Inline
    }

    fn supports_presentation_mode_api(&self) -> bool {
        false
    }

    fn set_presentation_mode(&self, _mode: PresentationMode) {}

    fn displaying_fullscreen(&self) -> bool {
        false
    }

    fn enter_fullscreen(&self) {}

    fn exit_fullscreen(&self) {}

    fn video_track_count(&self) -> usize {
        0
    }

    fn selected_video_track(&self) -> Option<VideoTrackInfo> {
        None
    }

    fn playback_quality(&self) -> PlaybackQuality {
        PlaybackQuality::default()
    }
}
