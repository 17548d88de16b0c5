// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture tracking with live drag feedback.
//!
//! Touch and pointer drags are treated as one abstract drag source. Only one
//! gesture is tracked at a time: input from another source while a gesture
//! is active is ignored until that gesture ends.
//!
//! The visual offset follows the finger only toward a direction the viewer
//! may currently navigate to. At a boundary the offset stays at zero, which
//! tells the user the swipe is blocked.

use super::navigation::{Direction, NavigationFlags};
use iced::Point;
use std::time::Instant;

/// Default distance a drag must travel before it reports a direction.
pub const DEFAULT_MIN_DISTANCE: f32 = 10.0;

/// Default horizontal distance that confirms a swipe on release.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 10.0;

/// Origin of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Touch,
}

/// Horizontal classification of an ongoing drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content dragged to the left, toward the next image.
    Left,
    /// Content dragged to the right, toward the previous image.
    Right,
}

impl SwipeDirection {
    /// Navigation direction this swipe asks for.
    #[must_use]
    pub fn navigation(self) -> Direction {
        match self {
            SwipeDirection::Left => Direction::Next,
            SwipeDirection::Right => Direction::Previous,
        }
    }
}

/// Thresholds used to classify drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Distance (either axis) below which no direction is reported.
    pub min_distance: f32,
    /// Horizontal distance that confirms a swipe on release.
    pub swipe_threshold: f32,
    /// Horizontal speed (units per second) that confirms a short flick.
    /// Disabled when `None`.
    pub flick_velocity: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            flick_velocity: None,
        }
    }
}

/// Transient gesture snapshot. Neutral whenever no drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub active: bool,
    pub delta_x: f32,
    pub direction: Option<SwipeDirection>,
}

/// Gesture tracker state.
#[derive(Debug, Clone, Default)]
pub struct State {
    config: GestureConfig,
    gesture: GestureState,
    source: Option<DragSource>,
    origin: Option<Point>,
    started_at: Option<Instant>,
    /// Set once the drag travelled `min_distance` on either axis.
    swiping: bool,
    offset: f32,
}

/// Messages for the gesture tracker.
#[derive(Debug, Clone)]
pub enum Message {
    /// A drag started at `position`.
    Start {
        source: DragSource,
        position: Point,
        at: Instant,
    },
    /// The drag moved to `position`.
    Move { source: DragSource, position: Point },
    /// The drag was released.
    End { source: DragSource, at: Instant },
    /// The host lost track of the drag (cursor left the window, touch lost).
    Cancel,
}

/// Effects produced by the gesture tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// New visual offset for the displayed image.
    Offset(f32),
    /// A swipe was confirmed; the offset is already back to zero.
    Swipe(Direction),
    /// The gesture ended without confirming a swipe; the offset is back to zero.
    Cancelled,
}

impl State {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Handle a gesture message.
    ///
    /// `navigation` is the permission snapshot at the time of the event; it
    /// decides both the live offset and whether a release confirms a swipe.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, navigation: NavigationFlags) -> Effect {
        match msg {
            Message::Start {
                source,
                position,
                at,
            } => {
                if self.gesture.active {
                    return Effect::None;
                }
                self.gesture.active = true;
                self.source = Some(source);
                self.origin = Some(position);
                self.started_at = Some(at);
                Effect::None
            }
            Message::Move { source, position } => {
                if !self.tracks(source) {
                    return Effect::None;
                }
                let Some(origin) = self.origin else {
                    return Effect::None;
                };

                let delta_x = position.x - origin.x;
                let delta_y = position.y - origin.y;
                self.gesture.delta_x = delta_x;

                if !self.swiping
                    && delta_x.abs().max(delta_y.abs()) < self.config.min_distance
                {
                    return Effect::None;
                }
                self.swiping = true;

                self.gesture.direction = if delta_x.abs() > delta_y.abs() {
                    Some(if delta_x < 0.0 {
                        SwipeDirection::Left
                    } else {
                        SwipeDirection::Right
                    })
                } else {
                    None
                };

                self.offset = match self.gesture.direction {
                    Some(direction) if navigation.allows(direction.navigation()) => delta_x,
                    _ => 0.0,
                };
                Effect::Offset(self.offset)
            }
            Message::End { source, at } => {
                if !self.tracks(source) {
                    return Effect::None;
                }
                let confirmed = self
                    .gesture
                    .direction
                    .filter(|_| self.swiping && self.crosses_threshold(at))
                    .map(SwipeDirection::navigation)
                    .filter(|direction| navigation.allows(*direction));

                self.reset();
                match confirmed {
                    Some(direction) => Effect::Swipe(direction),
                    None => Effect::Cancelled,
                }
            }
            Message::Cancel => {
                if !self.gesture.active {
                    return Effect::None;
                }
                self.reset();
                Effect::Cancelled
            }
        }
    }

    /// Current gesture snapshot.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Horizontal offset to apply to the displayed image.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gesture.active
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Drop any gesture in progress without emitting anything.
    pub fn reset(&mut self) {
        self.gesture = GestureState::default();
        self.source = None;
        self.origin = None;
        self.started_at = None;
        self.swiping = false;
        self.offset = 0.0;
    }

    fn tracks(&self, source: DragSource) -> bool {
        self.gesture.active && self.source == Some(source)
    }

    fn crosses_threshold(&self, released_at: Instant) -> bool {
        let distance = self.gesture.delta_x.abs();
        if distance >= self.config.swipe_threshold {
            return true;
        }

        let (Some(min_velocity), Some(started)) = (self.config.flick_velocity, self.started_at)
        else {
            return false;
        };
        let elapsed = released_at.saturating_duration_since(started).as_secs_f32();
        elapsed > 0.0 && distance / elapsed >= min_velocity
    }
}
