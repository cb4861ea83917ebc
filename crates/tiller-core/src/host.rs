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

//! Optional embedder integration.
//!
//! A host is the embedder-side object that knows things the media element
//! itself cannot: platform capability flags, the classification to apply,
//! how to present a native context menu. Every method has a default, so a
//! host implements only what it cares about; the coordinator works without
//! any host at all.

use crate::layout::{LayoutMode, LayoutTraits, StandardLayoutTraits};
use crate::surface::ElementHandle;
use crate::variant::ControlKind;
use std::rc::Rc;
use std::time::Duration;

/// Options for a host-presented context menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextMenuOptions {
    /// Offer the list of playback rates.
    pub include_playback_rates: bool,
    /// Offer the media-stats overlay toggle.
    pub include_stats_toggle: bool,
    /// Promote single-entry submenus to the top level.
    pub promote_sub_menus: bool,
}

/// Capability flags and callbacks supplied by the embedder.
pub trait HostContext {
    /// Forces the controls to be available regardless of the element-level
    /// native-controls flag.
    fn should_force_controls_display(&self) -> bool {
        false
    }

    /// Whether the embedder allows seeking on the current source.
    fn supports_seeking(&self) -> bool {
        true
    }

    /// Whether the embedder offers a rewind affordance.
    fn supports_rewind(&self) -> bool {
        true
    }

    /// Whether fullscreen is presented inside the page's own window.
    fn in_window_fullscreen(&self) -> bool {
        false
    }

    /// Whether the element is the sole content of a media document.
    fn is_in_media_document(&self) -> bool {
        false
    }

    /// Whether the chrome needs the user-agent pseudo-element marker on the
    /// controls.
    fn needs_chrome_media_controls_part(&self) -> bool {
        false
    }

    /// Classification hook: the layout traits to apply for `mode`.
    fn layout_traits_for(&self, mode: LayoutMode) -> Rc<dyn LayoutTraits> {
        Rc::new(StandardLayoutTraits::new(mode))
    }

    /// Host-declared auto-hide delay applied to freshly built variants.
    fn auto_hide_delay_override(&self) -> Option<Duration> {
        None
    }

    /// Presents a native context menu for `control`. Returns `true` when
    /// the menu will be shown; the embedder reports dismissal back through
    /// the coordinator.
    fn show_context_menu(&self, _control: ControlKind, _options: &ContextMenuOptions) -> bool {
        false
    }

    /// The presentation mode changed; notify embedder observers.
    fn presentation_mode_changed(&self) {}

    /// A label describing the media source, for the stats overlay.
    fn source_type(&self) -> Option<String> {
        None
    }

    /// The host-provided captions container, when there is one.
    fn text_track_container(&self) -> Option<ElementHandle> {
        None
    }

    /// Applies or removes the "controls bar visible" styling on the
    /// captions container.
    fn set_text_track_bar_visible(&self, _visible: bool) {}

    /// Told once at construction whether the active classification sizes
    /// controls from the page scale factor.
    fn set_controls_depend_on_page_scale(&self, _depends: bool) {}
}
