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

//! Time ranges reported by a media session.

/// An ordered set of non-overlapping `(start, end)` intervals in seconds.
///
/// Producers are responsible for keeping the pairs sorted and disjoint;
/// this type only indexes into them, the way the played/seekable attributes
/// of a media element are consumed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeRanges {
    ranges: Vec<(f64, f64)>,
}

impl TimeRanges {
    /// Creates an empty range set.
    #[inline]
    pub const fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Creates a set holding a single interval.
    ///
    /// # Example
    ///
    /// ```
    /// use tiller_core::media::TimeRanges;
    ///
    /// let seekable = TimeRanges::single(0.0, 120.0);
    /// assert_eq!(seekable.len(), 1);
    /// assert!(seekable.contains(60.0));
    /// ```
    pub fn single(start: f64, end: f64) -> Self {
        Self {
            ranges: vec![(start, end)],
        }
    }

    /// Creates a set from pre-sorted, disjoint `(start, end)` pairs.
    pub fn from_pairs(pairs: Vec<(f64, f64)>) -> Self {
        debug_assert!(
            pairs.windows(2).all(|w| w[0].1 <= w[1].0),
            "time ranges must be sorted and disjoint"
        );
        Self { ranges: pairs }
    }

    /// The number of intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` when there are no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The start of the interval at `index`, if it exists.
    #[inline]
    pub fn start(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).map(|range| range.0)
    }

    /// The end of the interval at `index`, if it exists.
    #[inline]
    pub fn end(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).map(|range| range.1)
    }

    /// The start of the first interval, if any.
    #[inline]
    pub fn first_start(&self) -> Option<f64> {
        self.start(0)
    }

    /// The end of the last interval, if any.
    #[inline]
    pub fn last_end(&self) -> Option<f64> {
        self.ranges.last().map(|range| range.1)
    }

    /// Returns `true` when `time` falls inside any interval (inclusive of
    /// both endpoints).
    pub fn contains(&self, time: f64) -> bool {
        self.ranges
            .iter()
            .any(|&(start, end)| start <= time && time <= end)
    }
}
