// SPDX-License-Identifier: MPL-2.0
//! Boundary checks for previous/next navigation.
//!
//! Everything here is a pure function of the current image identity, the
//! collection order and the viewer phase. Nothing is cached: callers ask
//! again after every phase or collection change, so a permission can never
//! outlive the snapshot it was computed from.

use super::phase::ViewerPhase;
use crate::domain::gallery::{ImageId, OrderedCollection};

/// Direction of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to the previous image.
    Previous,
    /// Navigate to the next image.
    Next,
}

/// Returns whether moving to the previous image is allowed.
///
/// Navigation is only allowed once the current image has settled, so a
/// second request can never overlap an in-flight asset swap.
#[must_use]
pub fn can_go_prev(
    current: Option<&ImageId>,
    collection: &OrderedCollection,
    phase: ViewerPhase,
) -> bool {
    phase == ViewerPhase::ImageLoaded
        && current
            .and_then(|id| collection.position(id))
            .is_some_and(|index| index > 0)
}

/// Returns whether moving to the next image is allowed.
#[must_use]
pub fn can_go_next(
    current: Option<&ImageId>,
    collection: &OrderedCollection,
    phase: ViewerPhase,
) -> bool {
    phase == ViewerPhase::ImageLoaded
        && current
            .and_then(|id| collection.position(id))
            .is_some_and(|index| index + 1 < collection.len())
}

/// Returns whether moving in `direction` is allowed.
#[must_use]
pub fn can_go(
    direction: Direction,
    current: Option<&ImageId>,
    collection: &OrderedCollection,
    phase: ViewerPhase,
) -> bool {
    match direction {
        Direction::Previous => can_go_prev(current, collection, phase),
        Direction::Next => can_go_next(current, collection, phase),
    }
}

/// Both permissions computed from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationFlags {
    pub can_prev: bool,
    pub can_next: bool,
}

impl NavigationFlags {
    #[must_use]
    pub fn compute(
        current: Option<&ImageId>,
        collection: &OrderedCollection,
        phase: ViewerPhase,
    ) -> Self {
        Self {
            can_prev: can_go_prev(current, collection, phase),
            can_next: can_go_next(current, collection, phase),
        }
    }

    #[must_use]
    pub fn allows(self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.can_prev,
            Direction::Next => self.can_next,
        }
    }

    /// Disabled state of the "previous" affordance.
    #[must_use]
    pub fn prev_disabled(self) -> bool {
        !self.can_prev
    }

    /// Disabled state of the "next" affordance.
    #[must_use]
    pub fn next_disabled(self) -> bool {
        !self.can_next
    }
}
