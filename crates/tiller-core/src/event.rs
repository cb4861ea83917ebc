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

//! The event vocabulary the coordinator consumes, and the listener
//! registry that decides media-event fan-out.
//!
//! Subscriptions are the one shared mutable resource in the system, and the
//! discipline is strict: whoever subscribes an interest is responsible for
//! releasing it, and nothing may be fanned out to a support that has
//! released. [`ListenerRegistry`] enforces the bookkeeping half of that
//! contract; the enable/disable pairing in the support protocol enforces
//! the rest.

use crate::layout::SupportKind;

/// A media-element event the supports can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEventKind {
    /// Playback started or resumed.
    Play,
    /// Playback paused.
    Pause,
    /// The duration became known or changed.
    DurationChange,
    /// The playhead advanced.
    TimeUpdate,
    /// Volume or muted state changed.
    VolumeChange,
    /// The playback rate changed.
    RateChange,
    /// Track metadata finished loading.
    LoadedMetadata,
    /// Buffered data grew.
    Progress,
    /// The media errored.
    Error,
}

/// Where a pointer event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// On the media element itself, under the controls overlay.
    Media,
    /// On the controls.
    Controls,
    /// On the surrounding surface.
    Surface,
}

/// Where a key event was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOrigin {
    /// Captured on the media element.
    Media,
    /// Captured at the window level.
    Window,
}

/// Every external event the coordinator routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlsEvent {
    /// The media's track list changed.
    TracksChanged,
    /// The mounting surface was resized.
    SurfaceResized,
    /// The surface-level fullscreen state changed.
    SurfaceFullscreenChanged,
    /// The element-level native-controls flag was toggled.
    NativeControlsChanged,
    /// A key went down.
    KeyDown {
        /// The key value, using the DOM key string convention.
        key: String,
        /// Where the key event was captured.
        origin: KeyOrigin,
    },
    /// A key went up.
    KeyUp {
        /// The key value, using the DOM key string convention.
        key: String,
        /// Where the key event was captured.
        origin: KeyOrigin,
    },
    /// A drag gesture started on the controls.
    DragStart,
    /// A click was delivered.
    Click {
        /// Where the click landed.
        target: EventTarget,
    },
    /// The media's presentation mode changed.
    PresentationModeChanged,
    /// A media-element event.
    Media(MediaEventKind),
}

/// The synchronous outcome of routing one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventDisposition {
    /// The embedder should suppress the event's default handling.
    pub default_prevented: bool,
    /// The embedder should stop the event from propagating further.
    pub propagation_stopped: bool,
}

impl EventDisposition {
    /// An event the router left alone.
    pub const fn untouched() -> Self {
        Self {
            default_prevented: false,
            propagation_stopped: false,
        }
    }
}

#[derive(Debug)]
struct Registration {
    binding_id: u64,
    kind: SupportKind,
    events: Vec<MediaEventKind>,
}

/// Proof of one subscription. Surrender it to
/// [`ListenerRegistry::release`] to unsubscribe; it cannot be cloned, so a
/// registration has exactly one owner.
#[derive(Debug)]
pub struct ListenerBinding(u64);

/// Media-event interest sets, one registration per support.
///
/// Fan-out order is subscription order, which is what keeps event delivery
/// deterministic across a variant's lifetime.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    registrations: Vec<Registration>,
    next_binding_id: u64,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `kind`'s interest in `events` and returns the binding
    /// proving the registration.
    ///
    /// A support enabling twice without an intervening disable is a
    /// programming error, caught here in debug builds.
    pub fn subscribe(&mut self, kind: SupportKind, events: &[MediaEventKind]) -> ListenerBinding {
        debug_assert!(
            !self.is_subscribed(kind),
            "{kind:?} subscribed twice without an intervening release"
        );
        self.next_binding_id += 1;
        let binding_id = self.next_binding_id;
        self.registrations.push(Registration {
            binding_id,
            kind,
            events: events.to_vec(),
        });
        log::trace!("Subscribed {kind:?} to {events:?}.");
        ListenerBinding(binding_id)
    }

    /// Removes exactly the registration the binding covers.
    ///
    /// Releasing a binding that is no longer held logs a warning and is
    /// otherwise a no-op.
    pub fn release(&mut self, binding: ListenerBinding) {
        let position = self
            .registrations
            .iter()
            .position(|registration| registration.binding_id == binding.0);
        match position {
            Some(index) => {
                let registration = self.registrations.remove(index);
                log::trace!("Released {:?}.", registration.kind);
            }
            None => {
                log::warn!("Released an unknown listener binding; ignoring.");
            }
        }
    }

    /// The supports interested in `event`, in subscription order.
    pub fn interested(&self, event: MediaEventKind) -> Vec<SupportKind> {
        self.registrations
            .iter()
            .filter(|registration| registration.events.contains(&event))
            .map(|registration| registration.kind)
            .collect()
    }

    /// Whether `kind` currently holds a registration.
    pub fn is_subscribed(&self, kind: SupportKind) -> bool {
        self.registrations
            .iter()
            .any(|registration| registration.kind == kind)
    }

    /// Whether the registry holds no registrations at all.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
