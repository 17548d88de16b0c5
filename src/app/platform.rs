// SPDX-License-Identifier: MPL-2.0
//! Window-level fullscreen support.
//!
//! iced changes the window mode on request but does not report mode changes
//! back, so every request is followed by the matching change notification.

use super::Message;
use crate::viewer::overlay;
use crate::viewer::{
    FullscreenCapability, FullscreenPlatform, FullscreenRequest, UnsupportedReason,
};
use iced::{window, Task};

/// Desktop windowing backends able to switch to a fullscreen mode.
const FULLSCREEN_TARGET: bool = cfg!(any(
    target_os = "linux",
    target_os = "windows",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
));

#[derive(Debug, Clone, Copy)]
pub struct WindowPlatform {
    enabled: bool,
    target_supported: bool,
}

impl WindowPlatform {
    /// `enabled` comes from the `[fullscreen]` config section.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            target_supported: FULLSCREEN_TARGET,
        }
    }
}

impl FullscreenPlatform for WindowPlatform {
    fn probe(&self) -> FullscreenCapability {
        if !self.target_supported {
            FullscreenCapability::Unsupported(UnsupportedReason::PlatformMissing)
        } else if !self.enabled {
            FullscreenCapability::Unsupported(UnsupportedReason::DisabledByConfig)
        } else {
            FullscreenCapability::Supported
        }
    }
}

/// Carries out `request` on `window_id` and reports the resulting mode.
pub fn apply(request: FullscreenRequest, window_id: Option<window::Id>) -> Task<Message> {
    let active = request == FullscreenRequest::Enter;
    let changed = Task::done(Message::Viewer(overlay::Message::FullscreenChanged(active)));

    let Some(window_id) = window_id else {
        log::warn!("no window known yet, ignoring {request:?}");
        // A window we never saw cannot be fullscreen.
        return if active { Task::none() } else { changed };
    };

    let mode = if active {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode).chain(changed)
}
