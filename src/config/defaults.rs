// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.
//!
//! # Categories
//!
//! - **Gesture**: drag classification distances and flick speed
//! - **Keyboard**: fullscreen toggle key

pub use crate::viewer::gesture::{DEFAULT_MIN_DISTANCE, DEFAULT_SWIPE_THRESHOLD};
pub use crate::viewer::keyboard::DEFAULT_FULLSCREEN_KEY;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Smallest accepted minimum drag distance (logical pixels).
pub const MIN_MIN_DISTANCE: f32 = 1.0;

/// Largest accepted minimum drag distance (logical pixels).
pub const MAX_MIN_DISTANCE: f32 = 200.0;

/// Smallest accepted swipe confirmation distance (logical pixels).
pub const MIN_SWIPE_THRESHOLD: f32 = 1.0;

/// Largest accepted swipe confirmation distance (logical pixels).
pub const MAX_SWIPE_THRESHOLD: f32 = 1000.0;

/// Slowest accepted flick speed (logical pixels per second).
pub const MIN_FLICK_VELOCITY: f32 = 50.0;

/// Fastest accepted flick speed (logical pixels per second).
pub const MAX_FLICK_VELOCITY: f32 = 10_000.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MIN_DISTANCE > 0.0);
    assert!(DEFAULT_MIN_DISTANCE >= MIN_MIN_DISTANCE);
    assert!(DEFAULT_MIN_DISTANCE <= MAX_MIN_DISTANCE);

    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    assert!(MIN_FLICK_VELOCITY > 0.0);
    assert!(MAX_FLICK_VELOCITY > MIN_FLICK_VELOCITY);
};
