// SPDX-License-Identifier: MPL-2.0
//! User interface rendering.
//!
//! Views are pure functions of state: they read the gallery and the viewer
//! overlay and emit [`crate::app::Message`]s.
//!
//! - [`gallery`] - Directory listing with the dimmed backdrop image
//! - [`viewer`] - Viewer overlay (backdrop, navigation, info bar, loading)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod viewer;
