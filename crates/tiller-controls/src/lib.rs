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

//! # Tiller Controls
//!
//! The playback-controls coordinator. [`MediaController`] binds a media
//! session to a mounting surface, keeps the right controls variant
//! installed for the current presentation context, routes external events,
//! and drives the per-control support objects.

#![warn(missing_docs)]

pub mod controller;
pub mod stats;
pub mod supports;

pub use controller::MediaController;
pub use stats::{StatsPanel, StatsPoller, StatsSnapshot};

#[cfg(test)]
pub(crate) mod testing;
