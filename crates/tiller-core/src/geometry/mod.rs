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

//! Provides the 2D geometry primitives behind controls sizing.
//!
//! This module contains the points, rectangles, pixel extents, and affine
//! transforms used to keep an on-screen controls container sized correctly
//! while the media element underneath it is arbitrarily transformed. The
//! centerpiece is [`untransformed_extent`], which recovers the intrinsic
//! (untransformed) pixel size of the container from the accumulated
//! transform chain of its ancestors.
//!
//! All coordinates are `f64`; pixel extents use the `u32` convention.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

// --- Declare Sub-Modules ---

pub mod rect;
pub mod transform;

// --- Re-export Principal Types ---

pub use self::rect::{Extent2D, Point, Rect};
pub use self::transform::Transform2D;

// --- Utility Functions ---

/// Returns `true` if two values are approximately equal within [`EPSILON`].
///
/// # Examples
///
/// ```
/// use tiller_core::geometry::approx_eq;
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Returns `true` if two values are approximately equal within `epsilon`.
///
/// # Examples
///
/// ```
/// use tiller_core::geometry::approx_eq_eps;
/// assert!(approx_eq_eps(1.0, 1.01, 0.05));
/// assert!(!approx_eq_eps(1.0, 1.1, 0.05));
/// ```
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Computes the intrinsic pixel size of a controls container, as if the
/// media element underneath it were not visually transformed.
///
/// `transforms` is the transform chain from the media element up to the
/// root, media-first. The chain is folded into one accumulated transform
/// and inverted; the four corners of `bounds` are mapped through the
/// inverse, and the extent is the axis-aligned bounding rectangle of the
/// mapped corners, multiplied by `scale_factor` and rounded to whole
/// pixels.
///
/// Returns `None` when the accumulated transform is singular; callers are
/// expected to keep the previously known size in that case.
///
/// # Arguments
///
/// * `bounds` - The on-screen bounding rectangle of the container
/// * `transforms` - The ancestor transform chain, media-first
/// * `scale_factor` - The page scale factor applied to the recovered size
///
/// # Example
///
/// ```
/// use tiller_core::geometry::{untransformed_extent, Extent2D, Rect, Transform2D};
///
/// let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
/// let transforms = [Transform2D::from_scale(2.0, 2.0)];
/// let extent = untransformed_extent(bounds, &transforms, 1.0);
/// assert_eq!(extent, Some(Extent2D::new(200, 150)));
/// ```
pub fn untransformed_extent(
    bounds: Rect,
    transforms: &[Transform2D],
    scale_factor: f64,
) -> Option<Extent2D> {
    let accumulated = transforms
        .iter()
        .fold(Transform2D::IDENTITY, |acc, transform| acc.multiply(transform));
    let inverse = accumulated.inverse()?;
    let corners = bounds.corners().map(|corner| inverse.transform_point(corner));
    let mapped = Rect::from_points(&corners)?;
    Some(Extent2D::new(
        (mapped.width * scale_factor).round() as u32,
        (mapped.height * scale_factor).round() as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_untransformed_extent_identity_chain() {
        let bounds = Rect::new(10.0, 20.0, 640.0, 360.0);
        let extent = untransformed_extent(bounds, &[], 1.0);
        assert_eq!(extent, Some(Extent2D::new(640, 360)));
    }

    #[test]
    fn test_untransformed_extent_translation_only() {
        let bounds = Rect::new(0.0, 0.0, 320.0, 240.0);
        let transforms = [Transform2D::from_translation(50.0, -20.0)];
        let extent = untransformed_extent(bounds, &transforms, 1.0);
        assert_eq!(extent, Some(Extent2D::new(320, 240)));
    }

    #[test]
    fn test_untransformed_extent_rotation_swaps_axes() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 100.0);
        let transforms = [Transform2D::from_rotation(FRAC_PI_2)];
        let extent = untransformed_extent(bounds, &transforms, 1.0);
        assert_eq!(extent, Some(Extent2D::new(100, 400)));
    }

    #[test]
    fn test_untransformed_extent_undoes_ancestor_scale() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let transforms = [
            Transform2D::from_translation(12.0, 34.0),
            Transform2D::from_scale(2.0, 2.0),
        ];
        let extent = untransformed_extent(bounds, &transforms, 1.0);
        assert_eq!(extent, Some(Extent2D::new(200, 150)));
    }

    #[test]
    fn test_untransformed_extent_applies_scale_factor() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let transforms = [Transform2D::from_scale(2.0, 2.0)];
        let extent = untransformed_extent(bounds, &transforms, 2.0);
        assert_eq!(extent, Some(Extent2D::new(400, 300)));
    }

    #[test]
    fn test_untransformed_extent_singular_chain_yields_none() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let transforms = [Transform2D::from_scale(0.0, 1.0)];
        assert_eq!(untransformed_extent(bounds, &transforms, 1.0), None);
    }

    #[test]
    fn test_untransformed_extent_zero_area_bounds() {
        let bounds = Rect::new(5.0, 5.0, 0.0, 0.0);
        let extent = untransformed_extent(bounds, &[], 1.0);
        assert_eq!(extent, Some(Extent2D::new(0, 0)));
    }

    #[test]
    fn test_approx_eq_rejects_above_epsilon() {
        assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
        assert!(!approx_eq(1.0, 1.0 + EPSILON * 10.0));
    }
}
