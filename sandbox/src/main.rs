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

//! Walks a controls coordinator through a scripted playback session
//! against console-backed stand-ins for the media element, the mounting
//! surface, and the host. Run with `RUST_LOG=debug` to watch the
//! coordinator's own logging interleave with the script.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use tiller_controls::MediaController;
use tiller_core::error::PlaybackCommandError;
use tiller_core::event::{ControlsEvent, EventTarget, KeyOrigin, MediaEventKind};
use tiller_core::geometry::{Rect, Transform2D};
use tiller_core::host::HostContext;
use tiller_core::media::{
    MediaSession, PlaybackQuality, PresentationMode, TimeRanges, VideoTrackInfo,
};
use tiller_core::surface::{ElementHandle, MountSurface};
use tiller_core::variant::ControlKind;

/// A pretend media element with just enough state to drive the demo.
struct DemoMedia {
    paused: Cell<bool>,
    current_time: Cell<f64>,
    volume: Cell<f64>,
    muted: Cell<bool>,
    presentation_mode: Cell<PresentationMode>,
    quality: Cell<PlaybackQuality>,
}

impl DemoMedia {
    fn shared() -> Rc<Self> {
        Rc::new(Self {
            paused: Cell::new(true),
            current_time: Cell::new(42.0),
            volume: Cell::new(0.8),
            muted: Cell::new(false),
            presentation_mode: Cell::new(PresentationMode::Inline),
            quality: Cell::new(PlaybackQuality {
                total_video_frames: 1200,
                dropped_video_frames: 4,
            }),
        })
    }
}

impl MediaSession for DemoMedia {
    fn is_video(&self) -> bool {
        true
    }

    fn paused(&self) -> bool {
        self.paused.get()
    }

    fn current_time(&self) -> f64 {
        self.current_time.get()
    }

    fn duration(&self) -> f64 {
        300.0
    }

    fn playback_rate(&self) -> f64 {
        1.0
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn muted(&self) -> bool {
        self.muted.get()
    }

    fn native_controls(&self) -> bool {
        true
    }

    fn seekable(&self) -> TimeRanges {
        TimeRanges::single(0.0, 300.0)
    }

    fn played(&self) -> TimeRanges {
        TimeRanges::empty()
    }

    fn play(&self) -> Result<(), PlaybackCommandError> {
        log::info!("[media] play");
        self.paused.set(false);
        Ok(())
    }

    fn pause(&self) {
        log::info!("[media] pause");
        self.paused.set(true);
    }

    fn set_current_time(&self, seconds: f64) {
        log::info!("[media] seek to {seconds}s");
        self.current_time.set(seconds);
    }

    fn set_playback_rate(&self, _rate: f64) {}

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
        true
    }

    fn set_presentation_mode(&self, mode: PresentationMode) {
        log::info!("[media] presentation mode -> {mode:?}");
        self.presentation_mode.set(mode);
    }

    fn displaying_fullscreen(&self) -> bool {
        self.presentation_mode.get() == PresentationMode::Fullscreen
    }

    fn enter_fullscreen(&self) {
        self.presentation_mode.set(PresentationMode::Fullscreen);
    }

    fn exit_fullscreen(&self) {
        self.presentation_mode.set(PresentationMode::Inline);
    }

    fn video_track_count(&self) -> usize {
        1
    }

    fn selected_video_track(&self) -> Option<VideoTrackInfo> {
        Some(VideoTrackInfo {
            width: 1920,
            height: 1080,
            frame_rate: 25.0,
            codec: Some("avc1.64001f".to_string()),
            color_primaries: Some("bt709".to_string()),
            color_transfer: Some("bt709".to_string()),
            color_matrix: Some("bt709".to_string()),
        })
    }

    fn playback_quality(&self) -> PlaybackQuality {
        self.quality.get()
    }
}

/// A surface that narrates its child management to the log.
struct DemoSurface {
    bounds: Cell<Rect>,
    transforms: RefCell<Vec<Transform2D>>,
}

impl DemoSurface {
    fn shared() -> Rc<Self> {
        Rc::new(Self {
            bounds: Cell::new(Rect::new(0.0, 0.0, 960.0, 540.0)),
            transforms: RefCell::new(Vec::new()),
        })
    }
}

impl MountSurface for DemoSurface {
    fn controls_bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn ancestor_transforms(&self) -> Vec<Transform2D> {
        self.transforms.borrow().clone()
    }

    fn attach(&self, child: ElementHandle) {
        log::info!("[surface] attach {child:?}");
    }

    fn detach(&self, child: ElementHandle) {
        log::info!("[surface] detach {child:?}");
    }

    fn replace(&self, old: ElementHandle, new: ElementHandle) {
        log::info!("[surface] replace {old:?} -> {new:?}");
    }

    fn device_pixel_ratio(&self) -> f64 {
        2.0
    }
}

struct DemoHost;

impl HostContext for DemoHost {
    fn source_type(&self) -> Option<String> {
        Some("video/mp4".to_string())
    }

    fn presentation_mode_changed(&self) {
        log::info!("[host] presentation mode changed");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let media = DemoMedia::shared();
    let surface = DemoSurface::shared();
    let media_dyn: Rc<dyn MediaSession> = media.clone();
    let surface_dyn: Rc<dyn MountSurface> = surface.clone();
    let host: Rc<dyn HostContext> = Rc::new(DemoHost);

    log::info!("--- constructing the coordinator ---");
    let mut controller = MediaController::new(&media_dyn, &surface_dyn, Some(host.clone()));
    log::info!(
        "installed variant: {:?}, size {:?}",
        controller.variant().map(|variant| variant.kind()),
        controller.variant().map(|variant| variant.size()),
    );

    log::info!("--- playback begins ---");
    controller.control_activated(ControlKind::PlayPause);
    controller.handle_event(ControlsEvent::Media(MediaEventKind::Play));

    log::info!("--- the page scales the media down by half ---");
    surface
        .transforms
        .borrow_mut()
        .push(Transform2D::from_scale(0.5, 0.5));
    controller.handle_event(ControlsEvent::SurfaceResized);
    log::info!(
        "controls size now {:?}",
        controller.variant().map(|variant| variant.size())
    );

    log::info!("--- entering fullscreen ---");
    surface.transforms.borrow_mut().clear();
    controller.pinch_gesture_recognized();
    controller.handle_event(ControlsEvent::PresentationModeChanged);
    log::info!(
        "variant after the flip: {:?}",
        controller.variant().map(|variant| variant.kind())
    );

    log::info!("--- the space bar pauses in fullscreen ---");
    let disposition = controller.handle_event(ControlsEvent::KeyDown {
        key: " ".to_string(),
        origin: KeyOrigin::Window,
    });
    log::info!("space disposition: {disposition:?}");

    log::info!("--- skipping back ---");
    controller.control_activated(ControlKind::SkipBack);
    log::info!("playhead now at {}s", media.current_time.get());

    log::info!("--- stats overlay on, three poll ticks ---");
    controller.set_showing_stats(true);
    if let Some(poller) = controller.stats_poller() {
        for tick in 0..3 {
            if !poller.poll(&mut controller) {
                break;
            }
            if let Some(snapshot) = controller.stats_snapshot() {
                println!("tick {tick}: {}", serde_json::to_string_pretty(&snapshot)?);
            }
        }
    }
    controller.set_showing_stats(false);

    log::info!("--- leaving fullscreen with a media click would be in-window only; exit directly ---");
    media.set_presentation_mode(PresentationMode::Inline);
    controller.handle_event(ControlsEvent::PresentationModeChanged);
    controller.handle_event(ControlsEvent::Click {
        target: EventTarget::Surface,
    });

    log::info!("--- parking and reviving the coordinator ---");
    controller.deinitialize();
    controller.reinitialize(&media_dyn, &surface_dyn, Some(host));
    log::info!(
        "revived variant: {:?}, detached: {}",
        controller.variant().map(|variant| variant.kind()),
        controller.is_detached()
    );

    Ok(())
}
