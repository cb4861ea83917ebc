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

//! Layout-trait classification: which controls variant fits the current
//! presentation context, and which support objects it needs.
//!
//! The coordinator re-derives a [`LayoutTraits`] object from the host on
//! every update pass and compares its [`VariantKind`] against the live
//! variant. Hosts supply their own classification through
//! `HostContext::layout_traits_for`; [`StandardLayoutTraits`] is the default
//! used when no host is present or the host does not override it.

/// The presentation posture the coordinator derived for the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// The element is embedded in the page.
    Inline,
    /// The element occupies the whole screen.
    Fullscreen,
}

/// Which controls implementation class to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// The standard inline bar anchored to the media edge.
    InlineBar,
    /// The reduced start-button overlay used by compact inline contexts.
    InlineOverlay,
    /// The floating heads-up controls shown over fullscreen media.
    FullscreenHud,
}

/// Identifies one per-concern support object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportKind {
    /// Binds the play/pause button to playback state.
    PlayPause,
    /// Binds the skip-back button to the seekable window.
    SkipBack,
    /// Binds the skip-forward button to the seekable window.
    SkipForward,
    /// Binds the volume slider to volume state.
    Volume,
    /// Binds the mute button to the muted flag.
    Mute,
    /// Binds the fullscreen button to the presentation channel.
    Fullscreen,
}

/// The complete support set, in the order the standard classification
/// constructs and enables it.
pub const FULL_SUPPORT_SET: [SupportKind; 6] = [
    SupportKind::PlayPause,
    SupportKind::SkipBack,
    SupportKind::SkipForward,
    SupportKind::Volume,
    SupportKind::Mute,
    SupportKind::Fullscreen,
];

/// Classification output: everything the coordinator needs to know about
/// the current device/mode context.
pub trait LayoutTraits {
    /// The presentation posture this classification was derived for.
    fn mode(&self) -> LayoutMode;

    /// Which controls implementation class the context calls for.
    fn variant_kind(&self) -> VariantKind;

    /// The support objects the variant needs, in construction order.
    fn support_kinds(&self) -> Vec<SupportKind>;

    /// Seconds skipped by the skip back/forward controls.
    fn skip_duration(&self) -> f64 {
        15.0
    }

    /// `true` when this context never shows controls at all, vetoing
    /// availability outright.
    fn controls_never_available(&self) -> bool {
        false
    }

    /// `true` when the controls must be sized against the page scale
    /// factor.
    fn controls_depend_on_page_scale_factor(&self) -> bool {
        false
    }

    /// Convenience for `mode() == LayoutMode::Fullscreen`.
    fn is_fullscreen(&self) -> bool {
        self.mode() == LayoutMode::Fullscreen
    }
}

/// The default classification: a full-featured bar inline, a full-featured
/// heads-up display in fullscreen.
#[derive(Debug, Clone, Copy)]
pub struct StandardLayoutTraits {
    mode: LayoutMode,
}

impl StandardLayoutTraits {
    /// Creates the standard classification for `mode`.
    pub fn new(mode: LayoutMode) -> Self {
        Self { mode }
    }
}

impl LayoutTraits for StandardLayoutTraits {
    fn mode(&self) -> LayoutMode {
        self.mode
    }

    fn variant_kind(&self) -> VariantKind {
        match self.mode {
            LayoutMode::Inline => VariantKind::InlineBar,
            LayoutMode::Fullscreen => VariantKind::FullscreenHud,
        }
    }

    fn support_kinds(&self) -> Vec<SupportKind> {
        FULL_SUPPORT_SET.to_vec()
    }
}
