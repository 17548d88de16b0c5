// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability wrapper.
//!
//! Support is probed once when the controller is built and never re-derived,
//! so fullscreen affordances cannot flicker in and out between interactions.
//!
//! The controller does not own the fullscreen state. It asks the platform to
//! change mode and mirrors whatever the platform reports back through
//! [`FullscreenController::sync`], including exits the platform performs on
//! its own.

use std::fmt;

/// Why fullscreen is unavailable. Distinct from a user declining a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The host platform exposes no immersive display mode.
    PlatformMissing,
    /// Fullscreen was turned off in the configuration file.
    DisabledByConfig,
}

impl UnsupportedReason {
    /// Returns the i18n message key describing this reason.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UnsupportedReason::PlatformMissing => "fullscreen-unsupported-platform",
            UnsupportedReason::DisabledByConfig => "fullscreen-unsupported-config",
        }
    }
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedReason::PlatformMissing => write!(f, "platform has no fullscreen mode"),
            UnsupportedReason::DisabledByConfig => {
                write!(f, "fullscreen disabled by configuration")
            }
        }
    }
}

/// Result of probing the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenCapability {
    Supported,
    Unsupported(UnsupportedReason),
}

/// Platform side of fullscreen handling.
///
/// Implementations only answer the capability probe; mode changes are
/// carried out by the host from the returned [`FullscreenRequest`]s, and
/// change notifications come back through [`FullscreenController::sync`].
pub trait FullscreenPlatform {
    fn probe(&self) -> FullscreenCapability;
}

/// Mode change the host must ask the platform for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

/// Error returned by every operation when fullscreen is unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenError {
    Unsupported(UnsupportedReason),
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullscreenError::Unsupported(reason) => write!(f, "Fullscreen unsupported: {reason}"),
        }
    }
}

impl std::error::Error for FullscreenError {}

/// What to do when the user asks to close the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Not fullscreen: close right away.
    CloseNow,
    /// Fullscreen: exit first; the close follows the platform's exit notification.
    ExitFirst(FullscreenRequest),
}

/// Outcome of mirroring a platform notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    None,
    /// Fullscreen ended while a close was waiting for it.
    DeferredClose,
}

#[derive(Debug, Clone)]
pub struct FullscreenController {
    capability: FullscreenCapability,
    active: bool,
    close_pending: bool,
}

impl FullscreenController {
    /// Probes `platform` once and builds the controller around the answer.
    pub fn new(platform: &impl FullscreenPlatform) -> Self {
        let capability = platform.probe();
        if let FullscreenCapability::Unsupported(reason) = capability {
            log::info!("fullscreen unavailable: {reason}");
        }
        Self::with_capability(capability)
    }

    #[must_use]
    pub fn with_capability(capability: FullscreenCapability) -> Self {
        Self {
            capability,
            active: false,
            close_pending: false,
        }
    }

    #[must_use]
    pub fn capability(&self) -> FullscreenCapability {
        self.capability
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.capability == FullscreenCapability::Supported
    }

    /// Whether the platform last reported fullscreen as active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_close_pending(&self) -> bool {
        self.close_pending
    }

    /// Requests fullscreen. `Ok(None)` when already active.
    pub fn enter(&self) -> Result<Option<FullscreenRequest>, FullscreenError> {
        self.ensure_supported()?;
        Ok((!self.active).then_some(FullscreenRequest::Enter))
    }

    /// Requests windowed mode. `Ok(None)` when not active.
    pub fn exit(&self) -> Result<Option<FullscreenRequest>, FullscreenError> {
        self.ensure_supported()?;
        Ok(self.active.then_some(FullscreenRequest::Exit))
    }

    pub fn toggle(&self) -> Result<Option<FullscreenRequest>, FullscreenError> {
        if self.active {
            self.exit()
        } else {
            self.enter()
        }
    }

    /// Decides how a close request proceeds.
    pub fn request_close(&mut self) -> CloseDecision {
        if self.active {
            self.close_pending = true;
            CloseDecision::ExitFirst(FullscreenRequest::Exit)
        } else {
            CloseDecision::CloseNow
        }
    }

    /// Mirrors a platform fullscreen change notification.
    pub fn sync(&mut self, active: bool) -> SyncOutcome {
        if !self.is_supported() {
            return SyncOutcome::None;
        }
        if self.active != active {
            log::debug!("fullscreen active: {} -> {}", self.active, active);
        }
        self.active = active;

        if !active && self.close_pending {
            self.close_pending = false;
            SyncOutcome::DeferredClose
        } else {
            SyncOutcome::None
        }
    }

    /// Forgets a pending close (the overlay closed through another path).
    pub fn clear_pending_close(&mut self) {
        self.close_pending = false;
    }

    fn ensure_supported(&self) -> Result<(), FullscreenError> {
        match self.capability {
            FullscreenCapability::Supported => Ok(()),
            FullscreenCapability::Unsupported(reason) => Err(FullscreenError::Unsupported(reason)),
        }
    }
}
