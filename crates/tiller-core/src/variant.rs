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

//! The data model of one controls implementation instance.
//!
//! A [`ControlsVariant`] is the coordinator-owned state of the controls the
//! embedder renders: which class it is, its element identity, enablement,
//! fade and visibility, geometry, and the per-control states the support
//! objects drive. The visual realization lives entirely on the embedder
//! side; swapping a variant means discarding this state and building a new
//! one, never morphing the instance in place.

use crate::config::ControlsConfig;
use crate::geometry::{approx_eq, Extent2D};
use crate::layout::VariantKind;
use crate::surface::ElementHandle;
use std::time::Duration;

/// Identifies one control inside a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// The combined play/pause button.
    PlayPause,
    /// The skip-back button.
    SkipBack,
    /// The skip-forward button.
    SkipForward,
    /// The rewind-to-start button.
    Rewind,
    /// The volume slider.
    VolumeSlider,
    /// The mute toggle.
    Mute,
    /// The fullscreen toggle.
    Fullscreen,
}

/// The control set carried by the full-featured variants.
pub const FULL_CONTROL_SET: [ControlKind; 7] = [
    ControlKind::PlayPause,
    ControlKind::SkipBack,
    ControlKind::SkipForward,
    ControlKind::Rewind,
    ControlKind::VolumeSlider,
    ControlKind::Mute,
    ControlKind::Fullscreen,
];

/// The reduced control set carried by the inline overlay variant.
pub const OVERLAY_CONTROL_SET: [ControlKind; 2] =
    [ControlKind::PlayPause, ControlKind::Fullscreen];

/// State of a single control, as driven by its support object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    /// Which control this is.
    pub kind: ControlKind,
    /// Whether the control accepts interaction.
    pub enabled: bool,
    /// Whether the control shows its active glyph (playing, muted, ...).
    pub active: bool,
    /// Continuous value for slider-like controls, in `0.0..=1.0`.
    pub value: f64,
    /// Whether the control has been removed from the layout.
    pub dropped: bool,
}

impl ControlState {
    fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            enabled: true,
            active: false,
            value: 0.0,
            dropped: false,
        }
    }
}

/// The coordinator-owned state of one controls implementation instance.
#[derive(Debug, Clone)]
pub struct ControlsVariant {
    kind: VariantKind,
    element: ElementHandle,
    enabled: bool,
    visible: bool,
    faded: bool,
    extent: Extent2D,
    scale_factor: f64,
    layout_pending: bool,
    uses_ltr_layout: bool,
    auto_hide_delay: Duration,
    has_secondary_ui_attached: bool,
    wants_user_agent_part: bool,
    maximum_right_container_button_count_override: Option<usize>,
    controls: Vec<ControlState>,
}

impl ControlsVariant {
    /// Builds a variant of the given kind with its full control set and a
    /// freshly allocated element.
    pub fn new(kind: VariantKind, config: &ControlsConfig) -> Self {
        let control_kinds: &[ControlKind] = match kind {
            VariantKind::InlineBar | VariantKind::FullscreenHud => &FULL_CONTROL_SET,
            VariantKind::InlineOverlay => &OVERLAY_CONTROL_SET,
        };
        Self {
            kind,
            element: ElementHandle::allocate(),
            enabled: true,
            visible: true,
            faded: false,
            extent: Extent2D::default(),
            scale_factor: 1.0,
            layout_pending: false,
            uses_ltr_layout: true,
            auto_hide_delay: config.default_auto_hide_delay,
            has_secondary_ui_attached: false,
            wants_user_agent_part: false,
            maximum_right_container_button_count_override: None,
            controls: control_kinds.iter().copied().map(ControlState::new).collect(),
        }
    }

    // --- IDENTITY ---

    /// Which implementation class this variant is.
    #[inline]
    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    /// The element identity, stable for the variant's lifetime.
    #[inline]
    pub fn element(&self) -> ElementHandle {
        self.element
    }

    // --- LIFECYCLE ---

    /// Whether the variant is live (not torn down or parked).
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Tears the variant down for replacement or deinitialization.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Revives a parked variant on reinitialization.
    pub fn reenable(&mut self) {
        self.enabled = true;
    }

    /// Whether availability last deemed the controls visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records the availability outcome. Returns `true` when the value
    /// flipped, which is the signal to notify the support objects.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        true
    }

    /// Whether the controls are currently faded out.
    #[inline]
    pub fn is_faded(&self) -> bool {
        self.faded
    }

    /// Records the embedder's fade outcome. Returns `true` when the value
    /// changed.
    pub fn set_faded(&mut self, faded: bool) -> bool {
        if self.faded == faded {
            return false;
        }
        self.faded = faded;
        true
    }

    /// Starts the variant un-faded, as a swap does when replacing a
    /// previous variant in place.
    pub fn fade_in(&mut self) {
        self.faded = false;
    }

    // --- GEOMETRY ---

    /// The last committed pixel size.
    #[inline]
    pub fn size(&self) -> Extent2D {
        self.extent
    }

    /// Stores a new pixel size, marking layout pending when it differs.
    pub fn set_size(&mut self, extent: Extent2D) {
        if self.extent == extent {
            return;
        }
        self.extent = extent;
        self.layout_pending = true;
    }

    /// The page scale factor applied to the untransformed size.
    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Stores a new scale factor, marking layout pending when it differs.
    pub fn set_scale_factor(&mut self, factor: f64) {
        if approx_eq(self.scale_factor, factor) {
            return;
        }
        self.scale_factor = factor;
        self.layout_pending = true;
    }

    /// Whether a size or scale change is waiting to be flushed.
    #[inline]
    pub fn layout_pending(&self) -> bool {
        self.layout_pending
    }

    /// Flushes pending layout. Returns `true` when something was pending.
    pub fn commit_layout(&mut self) -> bool {
        let was_pending = self.layout_pending;
        self.layout_pending = false;
        was_pending
    }

    // --- LAYOUT DIRECTION AND CHROME ---

    /// Whether the variant lays controls out left-to-right.
    #[inline]
    pub fn uses_ltr_layout(&self) -> bool {
        self.uses_ltr_layout
    }

    /// Sets the layout direction.
    pub fn set_uses_ltr_layout(&mut self, ltr: bool) {
        self.uses_ltr_layout = ltr;
    }

    /// The delay before the embedder's scheduler fades the controls out.
    #[inline]
    pub fn auto_hide_delay(&self) -> Duration {
        self.auto_hide_delay
    }

    /// Overrides the auto-hide delay.
    pub fn set_auto_hide_delay(&mut self, delay: Duration) {
        self.auto_hide_delay = delay;
    }

    /// Whether secondary UI (a context menu) is parked on the controls,
    /// which suspends auto-hiding.
    #[inline]
    pub fn has_secondary_ui_attached(&self) -> bool {
        self.has_secondary_ui_attached
    }

    /// Marks or clears the secondary-UI presence.
    pub fn set_has_secondary_ui_attached(&mut self, attached: bool) {
        self.has_secondary_ui_attached = attached;
    }

    /// Whether the chrome asked for the user-agent pseudo-element marker.
    #[inline]
    pub fn wants_user_agent_part(&self) -> bool {
        self.wants_user_agent_part
    }

    /// Sets the user-agent pseudo-element marker.
    pub fn set_wants_user_agent_part(&mut self, wants: bool) {
        self.wants_user_agent_part = wants;
    }

    /// Testing override for the right container's button budget.
    #[inline]
    pub fn maximum_right_container_button_count_override(&self) -> Option<usize> {
        self.maximum_right_container_button_count_override
    }

    /// Sets the testing override for the right container's button budget.
    pub fn set_maximum_right_container_button_count_override(&mut self, count: Option<usize>) {
        self.maximum_right_container_button_count_override = count;
    }

    // --- CONTROLS ---

    /// All control states, in the variant's layout order.
    #[inline]
    pub fn controls(&self) -> &[ControlState] {
        &self.controls
    }

    /// The state of one control, if this variant carries it.
    pub fn control(&self, kind: ControlKind) -> Option<&ControlState> {
        self.controls.iter().find(|control| control.kind == kind)
    }

    /// Mutable access to one control, if this variant carries it.
    pub fn control_mut(&mut self, kind: ControlKind) -> Option<&mut ControlState> {
        self.controls.iter_mut().find(|control| control.kind == kind)
    }

    /// Whether this variant carries the given control.
    pub fn has_control(&self, kind: ControlKind) -> bool {
        self.control(kind).is_some()
    }

    /// Removes a control from the layout while keeping its state entry.
    pub fn drop_control(&mut self, kind: ControlKind) {
        if let Some(control) = self.control_mut(kind) {
            control.dropped = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(kind: VariantKind) -> ControlsVariant {
        ControlsVariant::new(kind, &ControlsConfig::default())
    }

    #[test]
    fn test_control_sets_by_kind() {
        assert_eq!(variant(VariantKind::InlineBar).controls().len(), 7);
        assert_eq!(variant(VariantKind::FullscreenHud).controls().len(), 7);

        let overlay = variant(VariantKind::InlineOverlay);
        assert_eq!(overlay.controls().len(), 2);
        assert!(overlay.has_control(ControlKind::PlayPause));
        assert!(overlay.has_control(ControlKind::Fullscreen));
        assert!(!overlay.has_control(ControlKind::VolumeSlider));
    }

    #[test]
    fn test_new_variant_defaults() {
        let variant = variant(VariantKind::InlineBar);
        assert!(variant.is_enabled());
        assert!(variant.is_visible());
        assert!(!variant.is_faded());
        assert!(!variant.layout_pending());
        assert!(variant.uses_ltr_layout());
        assert_eq!(variant.scale_factor(), 1.0);
        assert_eq!(
            variant.auto_hide_delay(),
            ControlsConfig::default().default_auto_hide_delay
        );
    }

    #[test]
    fn test_size_changes_mark_layout_pending() {
        let mut variant = variant(VariantKind::InlineBar);
        variant.set_size(Extent2D::new(640, 80));
        assert!(variant.layout_pending());

        assert!(variant.commit_layout());
        assert!(!variant.layout_pending());
        assert!(!variant.commit_layout(), "nothing left to flush");

        // Storing the same size again is not a layout change.
        variant.set_size(Extent2D::new(640, 80));
        assert!(!variant.layout_pending());
    }

    #[test]
    fn test_scale_factor_changes_mark_layout_pending() {
        let mut variant = variant(VariantKind::InlineBar);
        variant.set_scale_factor(1.0);
        assert!(!variant.layout_pending());
        variant.set_scale_factor(2.0);
        assert!(variant.layout_pending());
    }

    #[test]
    fn test_visible_flip_detection() {
        let mut variant = variant(VariantKind::InlineBar);
        assert!(!variant.set_visible(true), "already visible");
        assert!(variant.set_visible(false));
        assert!(variant.set_visible(true));
    }

    #[test]
    fn test_drop_control_keeps_state_entry() {
        let mut variant = variant(VariantKind::InlineBar);
        variant.drop_control(ControlKind::Rewind);
        let rewind = variant.control(ControlKind::Rewind).unwrap();
        assert!(rewind.dropped);
        assert_eq!(variant.controls().len(), 7, "entry is retained");
    }

    #[test]
    fn test_disable_and_reenable() {
        let mut variant = variant(VariantKind::FullscreenHud);
        variant.disable();
        assert!(!variant.is_enabled());
        variant.reenable();
        assert!(variant.is_enabled());
    }
}
