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

//! Weak handles to externally-owned collaborators.
//!
//! The coordinator never owns the media session or the mounting surface; it
//! observes them through a [`WeakHandle`] that pairs a `Weak` reference with
//! an inert substitute. Every access goes through [`WeakHandle::resolve`],
//! which hands back the substitute once the real target is gone, so callers
//! degrade to no-ops instead of sprinkling liveness checks.

use std::fmt;
use std::rc::{Rc, Weak};

/// A weak reference with a guaranteed fallback.
///
/// `resolve` never fails: when the target has been dropped (or the handle
/// was created unbound), the stored substitute is returned instead.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use tiller_core::handle::WeakHandle;
///
/// let substitute: Rc<str> = Rc::from("substitute");
/// let target: Rc<str> = Rc::from("target");
///
/// let handle = WeakHandle::new(&target, substitute);
/// assert_eq!(&*handle.resolve(), "target");
///
/// drop(target);
/// assert_eq!(&*handle.resolve(), "substitute");
/// ```
pub struct WeakHandle<T: ?Sized> {
    target: Option<Weak<T>>,
    substitute: Rc<T>,
}

impl<T: ?Sized> WeakHandle<T> {
    /// Creates a handle bound to a live target.
    ///
    /// # Arguments
    ///
    /// * `target` - The collaborator to observe without owning
    /// * `substitute` - The inert stand-in returned once `target` is gone
    pub fn new(target: &Rc<T>, substitute: Rc<T>) -> Self {
        Self {
            target: Some(Rc::downgrade(target)),
            substitute,
        }
    }

    /// Creates an unbound handle that always resolves to the substitute.
    pub fn absent(substitute: Rc<T>) -> Self {
        Self {
            target: None,
            substitute,
        }
    }

    /// Upgrades to the target, or clones the substitute when the target is
    /// gone. Never fails.
    pub fn resolve(&self) -> Rc<T> {
        self.target
            .as_ref()
            .and_then(Weak::upgrade)
            .unwrap_or_else(|| Rc::clone(&self.substitute))
    }

    /// Returns `true` while the target is still alive.
    pub fn is_live(&self) -> bool {
        self.target
            .as_ref()
            .map_or(false, |weak| weak.strong_count() > 0)
    }

    /// Points the handle at a new target, keeping the same substitute.
    pub fn rebind(&mut self, target: &Rc<T>) {
        self.target = Some(Rc::downgrade(target));
    }
}

impl<T: ?Sized> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            substitute: Rc::clone(&self.substitute),
        }
    }
}

impl<T: ?Sized> fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakHandle")
            .field("live", &self.is_live())
            .finish()
    }
}
