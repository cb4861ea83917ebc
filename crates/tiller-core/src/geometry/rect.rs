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

//! Points, rectangles, and pixel extents.
//!
//! `Point` and `Rect` use `f64` components because they live in page
//! coordinates; `Extent2D` uses integer (`u32`) components, making it
//! suitable for the pixel-based size ultimately pushed onto a controls
//! variant.

use std::ops::{Add, Sub};

/// A point in 2D page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle in 2D page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x: f64,
    /// The y-coordinate of the top edge.
    pub y: f64,
    /// The width of the rectangle.
    pub width: f64,
    /// The height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The x-coordinate of the left edge.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// The x-coordinate of the right edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// The y-coordinate of the top edge.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// The y-coordinate of the bottom edge.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the four corners in top-left, top-right, bottom-right,
    /// bottom-left order.
    ///
    /// # Example
    ///
    /// ```
    /// use tiller_core::geometry::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
    /// assert_eq!(rect.corners()[2], Point::new(10.0, 5.0));
    /// ```
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        ]
    }

    /// Computes the axis-aligned bounding rectangle of a set of points.
    ///
    /// Returns `None` if the slice is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use tiller_core::geometry::{Point, Rect};
    ///
    /// let points = [Point::new(2.0, 1.0), Point::new(-1.0, 4.0)];
    /// let bounds = Rect::from_points(&points).unwrap();
    /// assert_eq!(bounds, Rect::new(-1.0, 1.0, 3.0, 3.0));
    /// ```
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), point| {
                (
                    Point::new(min.x.min(point.x), min.y.min(point.y)),
                    Point::new(max.x.max(point.x), max.y.max(point.y)),
                )
            });
        Some(Self::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}

/// A two-dimensional extent in integer pixels.
///
/// This is the size pushed onto a controls variant once the untransformed
/// bounds have been scaled and rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new extent.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
