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

//! The mounting surface the controls live on.
//!
//! The surface owns the real element tree; the coordinator only refers to
//! elements by opaque [`ElementHandle`] identity and asks the surface to
//! attach, detach, and replace them. Geometry queries ([`controls_bounds`],
//! [`ancestor_transforms`]) feed the untransformed-size computation.
//!
//! [`controls_bounds`]: MountSurface::controls_bounds
//! [`ancestor_transforms`]: MountSurface::ancestor_transforms

use crate::geometry::{Rect, Transform2D};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity token for an element owned by the mounting surface.
///
/// Allocation never reuses a value, so equality means "the same element".
/// Lifecycle code relies on this to verify that a variant keeps its element
/// across deinitialize/reinitialize and that swaps produce a fresh one.
///
/// # Example
///
/// ```
/// use tiller_core::surface::ElementHandle;
///
/// let first = ElementHandle::allocate();
/// let second = ElementHandle::allocate();
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementHandle(u64);

impl ElementHandle {
    /// Allocates a fresh handle, never equal to any earlier one.
    pub fn allocate() -> Self {
        Self(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identity value.
    #[inline]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// The mounting point for the controls container and its children.
///
/// Implemented by the embedder. Attach/detach calls are idempotent from the
/// coordinator's point of view: it never attaches the same handle twice
/// without detaching first, but a surface must tolerate detaching a handle
/// it no longer knows.
pub trait MountSurface {
    /// The bounding rectangle of the controls container on the page.
    fn controls_bounds(&self) -> Rect;

    /// The transform chain from the media element up to the root,
    /// media-first. An empty chain means no ancestor is transformed.
    fn ancestor_transforms(&self) -> Vec<Transform2D>;

    /// Mounts a child element.
    fn attach(&self, child: ElementHandle);

    /// Unmounts a child element.
    fn detach(&self, child: ElementHandle);

    /// Replaces a mounted child in place, preserving its position among
    /// siblings.
    fn replace(&self, old: ElementHandle, new: ElementHandle);

    /// Ratio of device pixels to page pixels.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }
}

/// An inert surface with zero bounds that ignores all child management.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl MountSurface for NullSurface {
    fn controls_bounds(&self) -> Rect {
        Rect::default()
    }

    fn ancestor_transforms(&self) -> Vec<Transform2D> {
        Vec::new()
    }

    fn attach(&self, _child: ElementHandle) {}

    fn detach(&self, _child: ElementHandle) {}

    fn replace(&self, _old: ElementHandle, _new: ElementHandle) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_handles_are_unique() {
        let handles: Vec<ElementHandle> = (0..64).map(|_| ElementHandle::allocate()).collect();
        for (i, a) in handles.iter().enumerate() {
            for b in &handles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_null_surface_is_inert() {
        let surface = NullSurface;
        assert_eq!(surface.controls_bounds(), Rect::default());
        assert!(surface.ancestor_transforms().is_empty());
        assert_eq!(surface.device_pixel_ratio(), 1.0);

        let child = ElementHandle::allocate();
        surface.attach(child);
        surface.detach(child);
    }
}
