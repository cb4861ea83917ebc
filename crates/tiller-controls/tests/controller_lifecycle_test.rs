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

//! Lifecycle scenarios: construction, deinitialize/reinitialize, and decay
//! of the weakly held collaborators.

mod common;

use common::{coordinator, RecordingSurface, StubMedia};
use tiller_core::event::{ControlsEvent, MediaEventKind};
use tiller_core::layout::VariantKind;
use tiller_core::media::FullscreenChannel;

#[test]
fn test_construction_installs_the_initial_variant() {
    // ARRANGE
    let media = StubMedia::shared();
    let surface = RecordingSurface::shared();

    // ACT
    let controller = coordinator(&media, &surface, None);

    // ASSERT
    let variant = controller.variant().expect("variant installed");
    assert_eq!(variant.kind(), VariantKind::InlineBar);
    assert!(variant.is_enabled());
    assert!(surface.is_mounted(controller.container()));
    assert!(surface.is_mounted(variant.element()));
    assert!(!variant.layout_pending(), "construction commits layout");
}

#[test]
fn test_fullscreen_channel_is_chosen_from_the_media_api() {
    let modern = StubMedia::shared();
    let surface = RecordingSurface::shared();
    let controller = coordinator(&modern, &surface, None);
    assert_eq!(
        controller.fullscreen_channel(),
        FullscreenChannel::PresentationMode
    );

    let legacy = StubMedia::shared();
    legacy.supports_presentation_mode_api.set(false);
    let surface = RecordingSurface::shared();
    let controller = coordinator(&legacy, &surface, None);
    assert_eq!(controller.fullscreen_channel(), FullscreenChannel::Legacy);
}

#[test]
fn test_deinitialize_parks_and_reinitialize_revives_the_same_variant() {
    // ARRANGE
    let media = StubMedia::shared();
    let surface = RecordingSurface::shared();
    let mut controller = coordinator(&media, &surface, None);
    let element_before = controller.variant().unwrap().element();

    // ACT: park.
    assert!(controller.deinitialize());

    // ASSERT: container unmounted, variant disabled but retained.
    assert!(controller.is_detached());
    assert!(!surface.is_mounted(controller.container()));
    let variant = controller.variant().expect("variant retained while parked");
    assert!(!variant.is_enabled());
    assert_eq!(variant.element(), element_before);

    // ACT: revive onto a fresh media/surface pair.
    let next_media = StubMedia::shared();
    let next_surface = RecordingSurface::shared();
    let next_media_dyn: std::rc::Rc<dyn tiller_core::media::MediaSession> = next_media.clone();
    let next_surface_dyn: std::rc::Rc<dyn tiller_core::surface::MountSurface> =
        next_surface.clone();
    assert!(controller.reinitialize(&next_media_dyn, &next_surface_dyn, None));

    // ASSERT: same variant instance, new mounting, channel preserved.
    assert!(!controller.is_detached());
    assert!(next_surface.is_mounted(controller.container()));
    let variant = controller.variant().unwrap();
    assert!(variant.is_enabled());
    assert_eq!(
        variant.element(),
        element_before,
        "reinitialize keeps the variant instance"
    );
    assert_eq!(
        controller.fullscreen_channel(),
        FullscreenChannel::PresentationMode,
        "the channel chosen at construction stays"
    );
}

#[test]
fn test_dropped_media_degrades_every_operation_to_a_no_op() {
    // ARRANGE
    let media = StubMedia::shared();
    let surface = RecordingSurface::shared();
    let mut controller = coordinator(&media, &surface, None);

    // ACT: the host tears the media down behind the coordinator's back.
    drop(media);

    // ASSERT: everything keeps working against the null substitute.
    controller.toggle_playback();
    controller.background_clicked();
    controller.pinch_gesture_recognized();
    controller.handle_event(ControlsEvent::Media(MediaEventKind::Play));
    controller.handle_event(ControlsEvent::SurfaceResized);
    assert!(!controller.is_fullscreen());
    assert!(
        !controller.set_showing_stats(true),
        "the null substitute is not a video"
    );
}

#[test]
fn test_dropped_surface_degrades_geometry_and_mounting() {
    let media = StubMedia::shared();
    let surface = RecordingSurface::shared();
    let mut controller = coordinator(&media, &surface, None);

    drop(surface);

    controller.handle_event(ControlsEvent::SurfaceResized);
    let variant = controller.variant().unwrap();
    assert_eq!(variant.size().width, 0, "null surface has zero bounds");
    assert!(controller.deinitialize(), "detach against the null surface");
}
