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

//! Tunables for the controls coordinator.

use std::time::Duration;

/// Configuration for a controls coordinator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlsConfig {
    /// Durations above this many seconds are treated as live/unbounded
    /// streams, which disables the skip controls.
    pub non_live_duration_ceiling: f64,
    /// How long a freshly shown controls bar stays up without interaction
    /// before the embedder's scheduler fades it out.
    pub default_auto_hide_delay: Duration,
    /// Length of the fade-in applied to a variant installed by a swap.
    pub fade_in_duration: Duration,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            // Seven days, the ceiling the skip controls use to tell a long
            // recording apart from an unbounded live stream.
            non_live_duration_ceiling: 604_800.0,
            default_auto_hide_delay: Duration::from_secs(4),
            fade_in_duration: Duration::from_millis(350),
        }
    }
}
