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

//! Affine transformations for 2D page coordinates.

use crate::geometry::rect::Point;
use crate::geometry::{approx_eq, EPSILON};

/// Represents a 2D affine transformation in CSS `matrix()` component order.
///
/// A point `(x, y)` maps to `(a·x + c·y + e, b·x + d·y + f)`. The six
/// components mirror the CSS shorthand `matrix(a, b, c, d, e, f)`, so a
/// style-provided transform can be carried over verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2D {
    /// The horizontal scaling component.
    pub a: f64,
    /// The vertical shearing component.
    pub b: f64,
    /// The horizontal shearing component.
    pub c: f64,
    /// The vertical scaling component.
    pub d: f64,
    /// The horizontal translation component.
    pub e: f64,
    /// The vertical translation component.
    pub f: f64,
}

impl Transform2D {
    /// The identity transform, which results in no change.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    // --- CONSTRUCTORS ---

    /// Creates a `Transform2D` from raw CSS matrix components.
    ///
    /// # Arguments
    ///
    /// * `a`, `b`, `c`, `d` - The linear part, column-major
    /// * `e`, `f` - The translation part
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Creates a `Transform2D` from a translation.
    ///
    /// # Arguments
    ///
    /// * `tx` - The horizontal offset to apply
    /// * `ty` - The vertical offset to apply
    ///
    /// # Example
    ///
    /// ```rust
    /// use tiller_core::geometry::{Point, Transform2D};
    ///
    /// let transform = Transform2D::from_translation(10.0, 20.0);
    /// assert_eq!(transform.transform_point(Point::ZERO), Point::new(10.0, 20.0));
    /// ```
    #[inline]
    pub fn from_translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Creates a `Transform2D` from a non-uniform scale.
    ///
    /// # Arguments
    ///
    /// * `sx` - The scale factor along the x axis
    /// * `sy` - The scale factor along the y axis
    ///
    /// # Example
    ///
    /// ```rust
    /// use tiller_core::geometry::{Point, Transform2D};
    ///
    /// let transform = Transform2D::from_scale(2.0, 0.5);
    /// assert_eq!(transform.transform_point(Point::new(4.0, 4.0)), Point::new(8.0, 2.0));
    /// ```
    #[inline]
    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Creates a `Transform2D` from a rotation about the origin.
    ///
    /// # Arguments
    ///
    /// * `angle` - The angle of rotation in radians
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::f64::consts::PI;
    /// use tiller_core::geometry::Transform2D;
    ///
    /// let transform = Transform2D::from_rotation(PI / 2.0);
    /// ```
    #[inline]
    pub fn from_rotation(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    // --- OPERATIONS ---

    /// Returns the matrix product `self × other`.
    ///
    /// The right-hand operand is the one applied first to a transformed
    /// point, matching the accumulation order of an ancestor chain walked
    /// from the innermost element outwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tiller_core::geometry::{Point, Transform2D};
    ///
    /// let translate = Transform2D::from_translation(10.0, 0.0);
    /// let scale = Transform2D::from_scale(2.0, 2.0);
    /// let combined = translate.multiply(&scale);
    /// assert_eq!(combined.transform_point(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
    /// ```
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            self.a * other.a + self.c * other.b,
            self.b * other.a + self.d * other.b,
            self.a * other.c + self.c * other.d,
            self.b * other.c + self.d * other.d,
            self.a * other.e + self.c * other.f + self.e,
            self.b * other.e + self.d * other.f + self.f,
        )
    }

    /// Computes the inverse transform.
    ///
    /// Returns `None` when the determinant is within [`EPSILON`] of zero,
    /// meaning the transform collapses the plane and cannot be undone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tiller_core::geometry::{Point, Transform2D};
    ///
    /// let transform = Transform2D::from_translation(10.0, 20.0);
    /// let inverse = transform.inverse().unwrap();
    /// assert_eq!(inverse.transform_point(Point::new(10.0, 20.0)), Point::ZERO);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < EPSILON {
            return None;
        }
        Some(Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.f - self.d * self.e) / det,
            (self.b * self.e - self.a * self.f) / det,
        ))
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn transform_point(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Returns `true` if this transform is approximately the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::IDENTITY)
    }

    /// Returns `true` if all six components are within [`EPSILON`] of the
    /// other transform's.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.a, other.a)
            && approx_eq(self.b, other.b)
            && approx_eq(self.c, other.c)
            && approx_eq(self.d, other.d)
            && approx_eq(self.e, other.e)
            && approx_eq(self.f, other.f)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for Transform2D {
    /// Builds a transform from `[a, b, c, d, e, f]` in CSS order.
    fn from(m: [f64; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }
}

impl From<Transform2D> for [f64; 6] {
    /// Flattens a transform to `[a, b, c, d, e, f]` in CSS order.
    fn from(t: Transform2D) -> Self {
        [t.a, t.b, t.c, t.d, t.e, t.f]
    }
}
