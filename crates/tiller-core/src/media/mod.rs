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

//! The contract between the controls coordinator and the media element.
//!
//! The coordinator reads playback state and issues commands exclusively
//! through [`MediaSession`]; it never assumes the element outlives it. The
//! module also carries the small value types that cross this boundary:
//! played/seekable [`TimeRanges`], the [`PresentationMode`] posture, and the
//! track/quality descriptors feeding the stats overlay.

use crate::error::PlaybackCommandError;
use crate::host::HostContext;

// --- Declare Sub-Modules ---

pub mod null;
pub mod ranges;

// --- Re-export Principal Types ---

pub use self::null::NullMedia;
pub use self::ranges::TimeRanges;

/// How the media element is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresentationMode {
    /// Embedded in the page at its layout position.
    Inline,
    /// Occupying the whole screen.
    Fullscreen,
    /// Detached into a floating picture-in-picture window.
    PictureInPicture,
}

/// Which command pair the coordinator uses to enter and leave fullscreen.
///
/// Chosen once, when the coordinator binds a media element: if the element
/// exposes the per-element presentation-mode API the modern channel is
/// adopted for the whole session, otherwise the legacy element-fullscreen
/// commands are. The choice never changes while the binding lives, so every
/// fullscreen query and command stays on one side of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenChannel {
    /// Drive fullscreen through [`MediaSession::set_presentation_mode`].
    PresentationMode,
    /// Drive fullscreen through the legacy enter/exit element commands.
    Legacy,
}

/// Whether the media is fullscreen, as seen through `channel`.
///
/// On the modern channel a host reporting in-window fullscreen counts as
/// fullscreen even while the element itself still reports
/// [`PresentationMode::Inline`].
pub fn is_fullscreen(
    media: &dyn MediaSession,
    channel: FullscreenChannel,
    host: Option<&dyn HostContext>,
) -> bool {
    match channel {
        FullscreenChannel::PresentationMode => {
            media.presentation_mode() == PresentationMode::Fullscreen
                || host.map_or(false, |host| host.in_window_fullscreen())
        }
        FullscreenChannel::Legacy => media.displaying_fullscreen(),
    }
}

/// Issues the play/pause toggle.
///
/// Media that has never begun playback gets a play command even when it
/// does not report itself paused, so the first toggle always starts
/// playback. A rejected play command is logged and swallowed; the controls
/// simply stay in their paused shape.
pub fn toggle_playback(media: &dyn MediaSession, has_played: bool) {
    if media.paused() || !has_played {
        if let Err(error) = media.play() {
            log::debug!("Play command rejected: {error}");
        }
    } else {
        media.pause();
    }
}

/// Frame counters sampled by the stats overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackQuality {
    /// Video frames the pipeline has produced so far.
    pub total_video_frames: u64,
    /// Video frames dropped before presentation.
    pub dropped_video_frames: u64,
}

/// Descriptor of the currently selected video track.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoTrackInfo {
    /// Coded frame width in pixels.
    pub width: u32,
    /// Coded frame height in pixels.
    pub height: u32,
    /// Nominal frame rate in frames per second.
    pub frame_rate: f64,
    /// Codec string, when known.
    pub codec: Option<String>,
    /// Color primaries label, when known.
    pub color_primaries: Option<String>,
    /// Color transfer characteristics label, when known.
    pub color_transfer: Option<String>,
    /// Color matrix coefficients label, when known.
    pub color_matrix: Option<String>,
}

/// Read/command surface of the media element the controls steer.
///
/// Implemented by the embedder. The coordinator resolves this through a weak
/// handle before every access, so implementations must tolerate commands
/// arriving while the element is tearing down; commands take `&self` and
/// implementations are expected to use interior mutability, mirroring how a
/// shared element behaves.
pub trait MediaSession {
    // --- IDENTITY ---

    /// Returns `true` when the element is a video (as opposed to audio-only).
    fn is_video(&self) -> bool;

    // --- PLAYBACK STATE ---

    /// Whether playback is currently paused.
    fn paused(&self) -> bool;
    /// The playhead position in seconds.
    fn current_time(&self) -> f64;
    /// Total duration in seconds; `f64::INFINITY` for unbounded streams.
    fn duration(&self) -> f64;
    /// The playback rate, where `1.0` is normal speed.
    fn playback_rate(&self) -> f64;
    /// The volume in `0.0..=1.0`.
    fn volume(&self) -> f64;
    /// Whether audio output is muted.
    fn muted(&self) -> bool;
    /// The element-level "render built-in controls" flag.
    fn native_controls(&self) -> bool;

    // --- RANGES ---

    /// The ranges the playhead may seek into.
    fn seekable(&self) -> TimeRanges;
    /// The ranges that have been played so far.
    fn played(&self) -> TimeRanges;

    // --- COMMANDS ---

    /// Requests playback.
    fn play(&self) -> Result<(), PlaybackCommandError>;
    /// Pauses playback.
    fn pause(&self);
    /// Moves the playhead to `seconds`.
    fn set_current_time(&self, seconds: f64);
    /// Changes the playback rate.
    fn set_playback_rate(&self, rate: f64);
    /// Changes the volume.
    fn set_volume(&self, volume: f64);
    /// Sets the muted flag.
    fn set_muted(&self, muted: bool);

    // --- PRESENTATION ---

    /// The current presentation mode.
    fn presentation_mode(&self) -> PresentationMode;
    /// Whether the per-element presentation-mode API is available. When it
    /// is, the coordinator adopts it as its fullscreen channel for the whole
    /// session.
    fn supports_presentation_mode_api(&self) -> bool;
    /// Requests a presentation-mode change (modern channel).
    fn set_presentation_mode(&self, mode: PresentationMode);
    /// Whether the element is displaying fullscreen (legacy channel).
    fn displaying_fullscreen(&self) -> bool;
    /// Enters element fullscreen (legacy channel).
    fn enter_fullscreen(&self);
    /// Exits element fullscreen (legacy channel).
    fn exit_fullscreen(&self);

    // --- TRACKS AND QUALITY ---

    /// The number of video tracks currently exposed.
    fn video_track_count(&self) -> usize;
    /// The selected video track, when one exists.
    fn selected_video_track(&self) -> Option<VideoTrackInfo>;
    /// Frame counters for the stats overlay.
    fn playback_quality(&self) -> PlaybackQuality;
}
