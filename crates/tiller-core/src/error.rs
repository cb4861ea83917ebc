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

//! Defines the error types for media playback commands.

use std::fmt;

/// An error returned by a media session when a playback command is refused.
///
/// Playback requests are fire-and-forget from the controls' perspective: the
/// coordinator logs and swallows these rather than propagating them, since
/// the worst-case outcome is a control reflecting a stale state for one
/// sync cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommandError {
    /// The platform or user-agent policy refused the command (e.g. an
    /// autoplay restriction rejecting an untrusted play request).
    NotAllowed,
    /// The media source cannot service the command in its current state.
    NotSupported,
    /// The command reached a session whose backing element is gone.
    Detached,
}

impl fmt::Display for PlaybackCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackCommandError::NotAllowed => {
                write!(f, "Playback command rejected by platform policy.")
            }
            PlaybackCommandError::NotSupported => {
                write!(f, "Playback command not supported by the media source.")
            }
            PlaybackCommandError::Detached => {
                write!(f, "Playback command sent to a detached media session.")
            }
        }
    }
}

impl std::error::Error for PlaybackCommandError {}
